#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ProjectConfigDeleteInput {
    pub name: String,
    pub force: bool,
}

impl ProjectConfigDeleteInput {
    pub(crate) fn query(&self) -> [(&'static str, bool); 1] {
        [("force", self.force)]
    }
}
