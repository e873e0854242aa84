//! Contract operations and the entry surfaces that accept them.

use std::fmt;

use crate::types::RecordKey;

/// Entry point through which the host calls the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    /// State-changing transaction.
    Invoke,
    /// Read-only query.
    Query,
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invoke => f.write_str("invoke"),
            Self::Query => f.write_str("query"),
        }
    }
}

/// A parsed contract call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Deployment initializer; does nothing.
    Init,
    /// Clear every known index.
    ResetIndexes,
    /// Register a company key and store its payload.
    AddCompany {
        /// Caller-chosen record key.
        key: RecordKey,
        /// Company JSON as sent by the caller.
        payload: String,
    },
    /// Fetch one raw company payload.
    GetCompany {
        /// Record key.
        key: RecordKey,
    },
    /// Fetch every company in index order.
    GetAllCompanies,
}

/// Why a function name and argument list did not form an [`Operation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The surface has no function by that name.
    Unknown {
        /// Surface that was called.
        surface: Surface,
        /// Requested function name.
        function: String,
    },
    /// A positional argument was not supplied.
    MissingArgument {
        /// Function name.
        function: &'static str,
        /// Zero-based argument position.
        position: usize,
    },
}

impl Operation {
    /// Wire name of the operation.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::ResetIndexes => "reset_indexes",
            Self::AddCompany { .. } => "add_company",
            Self::GetCompany { .. } => "get_company",
            Self::GetAllCompanies => "get_all_companies",
        }
    }

    /// Surface the operation is served on.
    pub fn surface(&self) -> Surface {
        match self {
            Self::Init | Self::ResetIndexes | Self::AddCompany { .. } => Surface::Invoke,
            Self::GetCompany { .. } | Self::GetAllCompanies => Surface::Query,
        }
    }

    /// Parses a call arriving on `surface`.
    ///
    /// Functions belonging to the other surface are reported as unknown.
    /// Extra arguments are ignored.
    pub fn parse(surface: Surface, function: &str, args: &[String]) -> Result<Self, ParseError> {
        let op = match function {
            "init" => Self::Init,
            "reset_indexes" => Self::ResetIndexes,
            "add_company" => Self::AddCompany {
                key: arg(args, "add_company", 0)?,
                payload: arg(args, "add_company", 1)?,
            },
            "get_company" => Self::GetCompany {
                key: arg(args, "get_company", 0)?,
            },
            "get_all_companies" => Self::GetAllCompanies,
            _ => {
                return Err(ParseError::Unknown {
                    surface,
                    function: function.to_string(),
                });
            }
        };

        if op.surface() != surface {
            return Err(ParseError::Unknown {
                surface,
                function: function.to_string(),
            });
        }
        Ok(op)
    }
}

fn arg(args: &[String], function: &'static str, position: usize) -> Result<String, ParseError> {
    args.get(position)
        .cloned()
        .ok_or(ParseError::MissingArgument { function, position })
}
