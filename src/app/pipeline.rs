//! The report run: read every group, render the markdown and publish it

use crate::config::Inputs;
use crate::error::Result;
use crate::github::{
    upsert_comment, ActionsRunner, EventContext, IssueComments, UpsertCommentInput,
    UpsertCommentOutput, COMMENT_MARK,
};
use crate::junit::JUnitReader;
use crate::markdown::{make_markdown_report, MarkdownContext};
use crate::table::TableSetFactory;
use crate::types::{GitHubContext, Outcome};
use std::io::Write;
use std::sync::Arc;
use tracing::info;

/// Rendered result of a run, before anything is published
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub outcome: Outcome,
    pub body: String,
    pub annotations: Vec<String>,
}

pub struct ReportPipeline {
    reader: Arc<dyn JUnitReader>,
    comments: Option<Arc<dyn IssueComments>>,
    runner: ActionsRunner,
}

impl ReportPipeline {
    pub fn new(reader: Arc<dyn JUnitReader>, runner: ActionsRunner) -> Self {
        Self {
            reader,
            comments: None,
            runner,
        }
    }

    pub fn with_comments(mut self, comments: Arc<dyn IssueComments>) -> Self {
        self.comments = Some(comments);
        self
    }

    /// Read the reports of every group and render the markdown body
    pub async fn build(&self, inputs: &Inputs, event: &EventContext) -> Result<RunReport> {
        info!("* read junit reports of {} group(s)", inputs.groups.len());
        let context = GitHubContext::new(&event.owner, &event.repo, &inputs.sha);
        let factory =
            TableSetFactory::new(Arc::clone(&self.reader)).with_failure_limit(inputs.limit_failures);
        let tables = factory.multi(&context, &inputs.groups).await?;

        info!("* make markdown report");
        let markdown_context = MarkdownContext {
            owner: event.owner.clone(),
            repo: event.repo.clone(),
            sha: inputs.sha.clone(),
            run_id: event.run_id,
            pull_number: inputs.pull_number,
            actor: event.actor.clone(),
        };

        Ok(match tables {
            Some(set) => RunReport {
                outcome: set.outcome,
                body: make_markdown_report(
                    &markdown_context,
                    set.outcome,
                    &set.summary.to_string(),
                    &set.failures.to_string(),
                ),
                annotations: set.annotations,
            },
            None => RunReport {
                outcome: Outcome::Passed,
                body: make_markdown_report(&markdown_context, Outcome::Passed, "", ""),
                annotations: Vec::new(),
            },
        })
    }

    /// Emit annotations, then publish the body as comment, job summary
    /// and step output. A dry run prints the body instead of publishing.
    pub async fn publish(
        &self,
        report: &RunReport,
        inputs: &Inputs,
        event: &EventContext,
        out: &mut (dyn Write + Send),
    ) -> Result<Option<UpsertCommentOutput>> {
        info!("* annotate failed tests");
        for annotation in &report.annotations {
            writeln!(out, "{annotation}")?;
        }

        if inputs.dry_run {
            info!("* dry run: printing the report instead of publishing it");
            writeln!(out, "{}", report.body)?;
            return Ok(None);
        }

        let comment = match (inputs.pull_number, &self.comments) {
            (Some(pull_number), Some(comments)) => {
                info!("* upsert comment matching {}", COMMENT_MARK);
                let result = upsert_comment(
                    comments.as_ref(),
                    &UpsertCommentInput {
                        owner: event.owner.clone(),
                        repo: event.repo.clone(),
                        pull_number,
                        mark: COMMENT_MARK.to_string(),
                        body: report.body.clone(),
                    },
                )
                .await?;
                if result.updated {
                    info!("updated comment: {}", result.id);
                } else {
                    info!("created comment: {}", result.id);
                }
                Some(result)
            }
            (None, _) => {
                info!("* no pull request number, skipping comment");
                None
            }
            (Some(_), None) => {
                info!("* no GitHub client, skipping comment");
                None
            }
        };

        info!("* post summary to summary page");
        self.runner.append_step_summary(&report.body)?;

        info!("* set output");
        self.runner.set_output("body", &report.body)?;

        Ok(comment)
    }

    pub async fn run(
        &self,
        inputs: &Inputs,
        event: &EventContext,
        out: &mut (dyn Write + Send),
    ) -> Result<RunReport> {
        let report = self.build(inputs, event).await?;
        self.publish(&report, inputs, event, out).await?;
        Ok(report)
    }
}
