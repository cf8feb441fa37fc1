use std::io::Write;

use async_trait::async_trait;
use clap::Parser;
use planbot_domain::{
    plan::default_plan,
    use_cases::{CreateIssuesUseCase, LabelSyncAction, SyncLabelsUseCase},
};
use planbot_models::RepositoryPath;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Populate a repository with the built-in project plan
#[derive(Parser)]
pub(crate) struct SeedCommand {
    /// Target repository ("owner/name"); defaults to the configured one
    repository_path: Option<RepositoryPath>,
}

#[async_trait(?Send)]
impl Command for SeedCommand {
    async fn execute<W: Write>(self, mut ctx: CommandContext<W>) -> Result<()> {
        let repository_path = match self.repository_path {
            Some(path) => path,
            None => ctx.config.repository.parse()?,
        };
        let plan = default_plan();

        let repository = ctx
            .api_service
            .repositories_get(repository_path.owner(), repository_path.name())
            .await?;
        writeln!(
            ctx.writer,
            "✓ Connected to repository: {}",
            repository.full_name
        )?;

        writeln!(ctx.writer)?;
        writeln!(ctx.writer, "=== Creating labels ===")?;
        let label_report = SyncLabelsUseCase {
            api_service: ctx.api_service.as_ref(),
        }
        .run(&repository_path, &plan.labels)
        .await?;

        for outcome in &label_report.outcomes {
            match (&outcome.error, outcome.action) {
                (None, LabelSyncAction::Created) => {
                    writeln!(ctx.writer, "✓ Created label: {}", outcome.name)?;
                }
                (None, LabelSyncAction::Updated) => {
                    writeln!(ctx.writer, "✓ Updated label: {}", outcome.name)?;
                }
                (Some(err), _) => {
                    writeln!(ctx.writer, "✗ Error with label '{}': {}", outcome.name, err)?;
                }
            }
        }

        writeln!(ctx.writer)?;
        writeln!(ctx.writer, "=== Creating issues ===")?;
        let issue_report = CreateIssuesUseCase {
            api_service: ctx.api_service.as_ref(),
        }
        .run(&repository_path, &plan.issues)
        .await;

        for outcome in &issue_report.outcomes {
            match &outcome.result {
                Ok(number) => {
                    writeln!(ctx.writer, "✓ Created #{}: {}", number, outcome.title)?;
                }
                Err(err) => {
                    writeln!(
                        ctx.writer,
                        "✗ Failed to create '{}': {}",
                        outcome.title, err
                    )?;
                }
            }
        }

        writeln!(ctx.writer)?;
        writeln!(ctx.writer, "=== Summary ===")?;
        writeln!(
            ctx.writer,
            "Successfully created: {} issues",
            issue_report.created_count()
        )?;
        if issue_report.failed_count() > 0 {
            writeln!(
                ctx.writer,
                "Failed to create: {} issues",
                issue_report.failed_count()
            )?;
        }
        writeln!(ctx.writer)?;
        writeln!(ctx.writer, "All issues have been created in the repository!")?;
        writeln!(
            ctx.writer,
            "View them at: https://github.com/{}/issues",
            repository.full_name
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU64, Ordering};

    use clap::Parser;
    use indoc::indoc;
    use planbot_ghapi_interface::{
        types::{GhIssue, GhLabel, GhRepository},
        ApiError,
    };

    use crate::{
        args::{Args, CommandExecutor},
        testutils::{test_command, CommandContextTest},
    };

    fn arrange_repository(ctx: &mut CommandContextTest) {
        ctx.api_service
            .expect_repositories_get()
            .once()
            .withf(|owner, name| owner == "owner" && name == "name")
            .return_once(|_, name| {
                Ok(GhRepository {
                    name: name.into(),
                    full_name: "owner/name".into(),
                    ..Default::default()
                })
            });
    }

    fn numbered_issue(number: u64, title: &str) -> GhIssue {
        GhIssue {
            number,
            title: title.into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn seeds_the_whole_plan() {
        let mut ctx = CommandContextTest::new();
        arrange_repository(&mut ctx);
        ctx.api_service.expect_labels_list().once().return_once(|_, _| {
            Ok(vec![GhLabel {
                name: "enhancement".into(),
                color: "ffffff".into(),
                description: None,
            }])
        });
        ctx.api_service
            .expect_labels_create()
            .times(8)
            .returning(|_, _, _| Ok(()));
        ctx.api_service
            .expect_labels_update()
            .once()
            .withf(|_, _, label| label.name == "enhancement" && label.color == "84b6eb")
            .returning(|_, _, _| Ok(()));

        let counter = AtomicU64::new(0);
        ctx.api_service
            .expect_issues_create()
            .times(16)
            .returning(move |_, _, title, _, _| {
                let number = counter.fetch_add(1, Ordering::SeqCst) + 1;
                Ok(numbered_issue(number, title))
            });

        let output = test_command(ctx, &["seed"]).await;

        assert!(output.starts_with("✓ Connected to repository: owner/name\n"));
        assert!(output.contains("✓ Created label: backend\n"));
        assert!(output.contains("✓ Updated label: enhancement\n"));
        assert!(output.contains("✓ Created #1: [EPIC] Backend Infrastructure Setup\n"));
        assert!(output.contains("✓ Created #16: Set up Docker Compose for Local Development\n"));
        assert!(!output.contains("Failed to create"));
        assert!(output.ends_with(indoc! {"
            === Summary ===
            Successfully created: 16 issues

            All issues have been created in the repository!
            View them at: https://github.com/owner/name/issues
        "}));
    }

    #[tokio::test]
    async fn keeps_going_when_one_issue_fails() {
        let mut ctx = CommandContextTest::new();
        arrange_repository(&mut ctx);
        ctx.api_service
            .expect_labels_list()
            .once()
            .return_once(|_, _| Ok(vec![]));
        ctx.api_service
            .expect_labels_create()
            .times(9)
            .returning(|_, _, _| Ok(()));

        let counter = AtomicU64::new(0);
        ctx.api_service
            .expect_issues_create()
            .times(16)
            .returning(move |_, _, title, _, _| {
                let number = counter.fetch_add(1, Ordering::SeqCst) + 1;
                if number == 5 {
                    Err(ApiError::ImplementationError {
                        source: "boom".into(),
                    })
                } else {
                    Ok(numbered_issue(number, title))
                }
            });

        let output = test_command(ctx, &["seed"]).await;

        assert!(output
            .contains("✗ Failed to create '[EPIC] Appointments & Availability System': boom\n"));
        assert!(output.contains("Successfully created: 15 issues\n"));
        assert!(output.contains("Failed to create: 1 issues\n"));
    }

    #[tokio::test]
    async fn logs_label_failures_without_counting_them_in_the_summary() {
        let mut ctx = CommandContextTest::new();
        arrange_repository(&mut ctx);
        ctx.api_service
            .expect_labels_list()
            .once()
            .return_once(|_, _| Ok(vec![]));

        let counter = AtomicU64::new(0);
        ctx.api_service
            .expect_labels_create()
            .times(9)
            .returning(move |_, _, label| {
                if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                    Err(ApiError::ImplementationError {
                        source: format!("invalid color for {}", label.name).into(),
                    })
                } else {
                    Ok(())
                }
            });
        ctx.api_service
            .expect_issues_create()
            .times(16)
            .returning(|_, _, title, _, _| Ok(numbered_issue(1, title)));

        let output = test_command(ctx, &["seed"]).await;

        assert!(output.contains("✗ Error with label 'backend': invalid color for backend\n"));
        assert!(output.contains("Successfully created: 16 issues\n"));
        assert!(!output.contains("Failed to create"));
    }

    #[tokio::test]
    async fn aborts_when_the_repository_fetch_fails() {
        let mut ctx = CommandContextTest::new();
        ctx.api_service
            .expect_repositories_get()
            .once()
            .return_once(|owner, name| {
                Err(ApiError::RepositoryNotFound {
                    repository_path: format!("{owner}/{name}"),
                })
            });

        let args = Args::try_parse_from(["planbot", "seed"]).unwrap();
        let mut buf = Vec::new();
        let result = CommandExecutor::parse_args_async(args, ctx.into_context(&mut buf)).await;

        assert!(result.is_err());
        assert!(buf.is_empty());
    }

    #[tokio::test]
    async fn targets_the_repository_given_as_argument() {
        let mut ctx = CommandContextTest::new();
        ctx.api_service
            .expect_repositories_get()
            .once()
            .withf(|owner, name| owner == "other" && name == "repo")
            .return_once(|owner, name| {
                Err(ApiError::RepositoryNotFound {
                    repository_path: format!("{owner}/{name}"),
                })
            });

        let args = Args::try_parse_from(["planbot", "seed", "other/repo"]).unwrap();
        let mut buf = Vec::new();
        let result = CommandExecutor::parse_args_async(args, ctx.into_context(&mut buf)).await;

        assert!(result.is_err());
    }
}
