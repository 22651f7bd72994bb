use alloy::primitives::U256;

/// A candidate as reported by the voting contract.
///
/// Candidates only live in memory: the list is rebuilt from the contract on
/// every load and ordered by contract index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub name: String,
    pub votes: U256,
}

impl Candidate {
    pub fn new(name: impl Into<String>, votes: U256) -> Self {
        Self {
            name: name.into(),
            votes,
        }
    }

    /// Vote count as an exact decimal string, whatever its magnitude.
    pub fn votes_display(&self) -> String {
        self.votes.to_string()
    }

    /// Single-line label used by the candidate list.
    pub fn label(&self) -> String {
        format!("{} - Votes: {}", self.name, self.votes_display())
    }
}

impl From<(String, U256)> for Candidate {
    fn from((name, votes): (String, U256)) -> Self {
        Self { name, votes }
    }
}
