//! Markdown body posted as the job summary and the pull request comment

use crate::types::Outcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownContext {
    pub owner: String,
    pub repo: String,
    pub sha: String,
    pub run_id: u64,
    pub pull_number: Option<u64>,
    pub actor: String,
}

impl MarkdownContext {
    fn run_url(&self) -> String {
        format!(
            "https://github.com/{}/{}/actions/runs/{}",
            self.owner, self.repo, self.run_id
        )
    }

    fn commit_url(&self) -> String {
        match self.pull_number {
            Some(number) => format!(
                "https://github.com/{}/{}/pull/{}/commits/{}",
                self.owner, self.repo, number, self.sha
            ),
            None => format!(
                "https://github.com/{}/{}/commit/{}",
                self.owner, self.repo, self.sha
            ),
        }
    }

    fn short_sha(&self) -> &str {
        self.sha
            .char_indices()
            .nth(7)
            .map_or(self.sha.as_str(), |(i, _)| &self.sha[..i])
    }
}

pub fn make_markdown_report(
    context: &MarkdownContext,
    outcome: Outcome,
    summary_table: &str,
    failure_table: &str,
) -> String {
    let (label, emoji) = match outcome {
        Outcome::Failed => ("Failed", "🙅‍♂️"),
        _ => ("Passed", "🙆‍♀️"),
    };

    let mut body = format!(
        "## 🥽 Go Test Report <sup>[CI]({})</sup>\n\n#### Result: `{}`{}\n\n",
        context.run_url(),
        label,
        emoji
    );

    if summary_table.is_empty() {
        body.push_str("No test results found.\n");
    } else {
        body.push_str(summary_table);
        body.push('\n');
    }

    if !summary_table.is_empty() && !failure_table.is_empty() {
        body.push_str("\n<br/>\n\n<details open>\n<summary> Failures </summary>\n\n");
        body.push_str(failure_table);
        body.push_str("\n\n</details>\n");
    }

    body.push_str(&format!(
        "\n---\n*This comment is created for the commit [{}]({}) pushed by @{}.*",
        context.short_sha(),
        context.commit_url(),
        context.actor
    ));
    body
}
