//! Action references

use std::fmt;

use crate::{Error, Result};

/// A specific version of a GitHub Action, identified by the repository that
/// houses it and a git ref (tag, branch or commit).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Action {
    /// User or organization owning the repository
    pub owner: String,
    /// Repository name, without the owner
    pub project: String,
    /// Tag, branch or commit SHA
    pub git_ref: String,
}

impl Action {
    pub fn new(
        owner: impl Into<String>,
        project: impl Into<String>,
        git_ref: impl Into<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            project: project.into(),
            git_ref: git_ref.into(),
        }
    }

    /// The `owner/project` repository slug.
    pub fn repository(&self) -> String {
        format!("{}/{}", self.owner, self.project)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}@{}", self.owner, self.project, self.git_ref)
    }
}

/// Parse a step's `uses` value, `owner/project[/path]@ref`.
///
/// A subpath is discarded: checksums always cover the whole repository.
pub fn parse_uses(uses: &str) -> Result<Action> {
    let invalid = |reason| Error::InvalidUses {
        uses: uses.to_string(),
        reason,
    };

    if uses.matches('@').count() != 1 {
        return Err(invalid("expected exactly one '@'"));
    }
    let (repo, git_ref) = uses.split_once('@').ok_or_else(|| invalid("missing '@'"))?;
    if git_ref.is_empty() {
        return Err(invalid("missing ref"));
    }

    let (owner, rest) = repo
        .split_once('/')
        .filter(|(owner, rest)| !owner.is_empty() && !rest.is_empty())
        .ok_or_else(|| invalid("expected owner/project"))?;

    let project = match rest.split_once('/') {
        None => rest,
        Some((project, path)) if !project.is_empty() && !path.is_empty() => project,
        Some(_) => return Err(invalid("invalid repository path")),
    };

    // Each part becomes a cache path segment.
    if is_dot_segment(owner)
        || is_dot_segment(project)
        || git_ref.split('/').any(is_dot_segment)
    {
        return Err(invalid("'.' and '..' are not allowed as path segments"));
    }

    Ok(Action::new(owner, project, git_ref))
}

fn is_dot_segment(segment: &str) -> bool {
    segment == "." || segment == ".."
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("foo/bar@v1", "foo", "bar", "v1")]
    #[case("foo/bar/extra@v1", "foo", "bar", "v1")]
    #[case("foo/bar/deeply/nested@main", "foo", "bar", "main")]
    #[case(
        "actions/checkout@b4ffde65f46336ab88eb53be808477a3936bae11",
        "actions",
        "checkout",
        "b4ffde65f46336ab88eb53be808477a3936bae11"
    )]
    fn parses(#[case] uses: &str, #[case] owner: &str, #[case] project: &str, #[case] r: &str) {
        assert_eq!(parse_uses(uses).unwrap(), Action::new(owner, project, r));
    }

    #[rstest]
    #[case::no_at("foobar")]
    #[case::two_ats("foo/bar@v1@v2")]
    #[case::no_slash("foobar@v1")]
    #[case::empty_owner("/bar@v1")]
    #[case::empty_project("foo/@v1")]
    #[case::empty_ref("foo/bar@")]
    #[case::empty_subpath("foo/bar/@v1")]
    #[case::empty_project_with_path("foo//path@v1")]
    #[case::dot_ref("foo/bar@.")]
    #[case::parent_ref("foo/bar@..")]
    #[case::parent_inside_ref("foo/bar@release/../../other")]
    #[case::dot_owner("./bar@v1")]
    #[case::parent_owner("../bar@v1")]
    #[case::parent_project("foo/..@v1")]
    fn rejects(#[case] uses: &str) {
        assert!(matches!(parse_uses(uses), Err(Error::InvalidUses { .. })));
    }

    #[rstest]
    #[case("foo/bar@release/1.x", "release/1.x")]
    #[case("foo/bar@v1..v2", "v1..v2")]
    #[case("foo/bar@.hidden", ".hidden")]
    fn dots_inside_segments_are_allowed(#[case] uses: &str, #[case] r: &str) {
        assert_eq!(parse_uses(uses).unwrap().git_ref, r);
    }

    #[test]
    fn display_round_trips_without_subpath() {
        let action = parse_uses("foo/bar/sub@v2").unwrap();
        assert_eq!(action.to_string(), "foo/bar@v2");
        assert_eq!(action.repository(), "foo/bar");
    }
}
