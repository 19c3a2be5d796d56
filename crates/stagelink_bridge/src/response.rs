//! Command responses.
//!
//! Handlers produce a typed [`Response`]; the legacy wire strings the remote
//! tool understands are produced only at the protocol boundary.

use std::fmt;

use stagelink_scene::ObjectId;

/// The outcome of a handled command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    /// Plain success, reported as `"Ok"`.
    Ok,
    /// Plain success or no-op, reported as `"0"`.
    Done,
    /// A referenced identifier did not resolve (or the operation could not
    /// produce an object), reported as `"1"`.
    NotFound,
    /// Duplication produced no selected object, reported as `"4"`.
    DuplicateFailed,
    /// The operation succeeded but the achieved identifier differs from the
    /// requested one, reported as `"3 <identifier>"`.
    RenamedTo(ObjectId),
    /// Success carrying the resulting identifier, reported verbatim.
    Identifier(ObjectId),
}

impl Response {
    /// Serialize to the wire string.
    pub fn to_wire(&self) -> String {
        match self {
            Response::Ok => "Ok".to_string(),
            Response::Done => "0".to_string(),
            Response::NotFound => "1".to_string(),
            Response::DuplicateFailed => "4".to_string(),
            Response::RenamedTo(id) => format!("3 {id}"),
            Response::Identifier(id) => id.to_string(),
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_forms() {
        assert_eq!(Response::Ok.to_wire(), "Ok");
        assert_eq!(Response::Done.to_wire(), "0");
        assert_eq!(Response::NotFound.to_wire(), "1");
        assert_eq!(Response::DuplicateFailed.to_wire(), "4");
        assert_eq!(Response::RenamedTo(ObjectId::new("Chair_2")).to_wire(), "3 Chair_2");
        assert_eq!(Response::Identifier(ObjectId::new("Chair")).to_wire(), "Chair");
    }
}
