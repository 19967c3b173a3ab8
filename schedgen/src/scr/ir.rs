//! Scribble IR.
//!
//! Only the global-protocol items needed for arbitration choreographies are
//! modeled: a module of protocols, role declarations, message statements and
//! nested choice constructs. Rendering recurses over the owned tree, so
//! every opened block closes by construction.

use crate::utils::indent;

const INDENT: usize = 4;

/// Module.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Module {
    /// Module name.
    pub name: String,

    /// Global protocols.
    pub protocols: Vec<Protocol>,
}

impl ToString for Module {
    fn to_string(&self) -> String {
        format!(
            "module {};\n\n{}",
            self.name,
            self.protocols.iter().map(|protocol| protocol.to_string()).collect::<Vec<_>>().join("\n\n")
        )
    }
}

/// Global protocol.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Protocol {
    /// Protocol name.
    pub name: String,

    /// Role declarations.
    pub roles: Vec<RoleDecl>,

    /// Body of the protocol.
    pub body: Vec<GlobalStatement>,
}

impl ToString for Protocol {
    fn to_string(&self) -> String {
        let roles = self.roles.iter().map(|role| role.to_string()).collect::<Vec<_>>().join(", ");

        if self.body.is_empty() {
            format!("global protocol {}({}) {{\n}}", self.name, roles)
        } else {
            format!(
                "global protocol {}({}) {{\n{}\n}}",
                self.name,
                roles,
                indent(gen_scribble_stmts(&self.body), INDENT)
            )
        }
    }
}

/// Role declaration.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct RoleDecl(pub String);

impl ToString for RoleDecl {
    fn to_string(&self) -> String { format!("role {}", self.0) }
}

/// Global statement.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum GlobalStatement {
    /// Message statement.
    Message {
        /// Message label.
        label: String,

        /// Sending role.
        from: String,

        /// Receiving role.
        to: String,

        /// Trailing comment.
        comment: Option<String>,
    },

    /// Choice construct at the deciding role, with `or`-separated branches.
    Choice {
        /// Deciding role.
        at: String,

        /// Branches of the choice.
        branches: Vec<Vec<GlobalStatement>>,
    },

    /// Comment.
    Comment(String),
}

impl ToString for GlobalStatement {
    fn to_string(&self) -> String {
        match self {
            Self::Message { label, from, to, comment } => {
                format!(
                    "{}() from {} to {};{}",
                    label,
                    from,
                    to,
                    comment.as_ref().map_or("".to_string(), |c| format!(" // {}", c))
                )
            }
            Self::Choice { at, branches } => {
                format!(
                    "choice at {} {{\n{}\n}}",
                    at,
                    branches
                        .iter()
                        .map(|branch| indent(gen_scribble_stmts(branch), INDENT))
                        .collect::<Vec<_>>()
                        .join("\n} or {\n")
                )
            }
            Self::Comment(comment) => format!("// {}", comment),
        }
    }
}

/// Generates Scribble code for statements.
pub fn gen_scribble_stmts(stmts: &[GlobalStatement]) -> String {
    stmts.iter().map(|stmt| stmt.to_string()).collect::<Vec<_>>().join("\n")
}

impl GlobalStatement {
    /// Creates new message statement.
    pub fn message(label: String, from: String, to: String) -> Self { Self::Message { label, from, to, comment: None } }

    /// Attaches a trailing comment to a message statement.
    #[must_use]
    pub fn with_comment(self, comment: String) -> Self {
        match self {
            Self::Message { label, from, to, comment: None } => {
                Self::Message { label, from, to, comment: Some(comment) }
            }
            _ => panic!("with_comment: self is not an uncommented message"),
        }
    }

    /// Creates new choice construct.
    pub fn choice(at: String, branches: Vec<Vec<GlobalStatement>>) -> Self {
        assert!(!branches.is_empty(), "choice should have at least one branch");
        Self::Choice { at, branches }
    }

    /// Creates new comment.
    pub fn comment(comment: String) -> Self { Self::Comment(comment) }
}
