use planbot_ghapi_interface::ApiService;
use planbot_models::{IssueSpec, RepositoryPath};

/// Outcome of one issue creation: the assigned number, or the error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueCreationOutcome {
    /// Issue title.
    pub title: String,
    /// Assigned issue number, or the failure message.
    pub result: Result<u64, String>,
}

/// Per-issue outcomes, in table order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IssueCreationReport {
    /// Outcomes.
    pub outcomes: Vec<IssueCreationOutcome>,
}

impl IssueCreationReport {
    /// Count of successfully created issues.
    pub fn created_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    /// Count of failed issues.
    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_err()).count()
    }
}

/// Create every issue of a table, one call per entry.
///
/// Creation is unconditional: there is no dedup key, so a second run produces
/// a second full set. A failed call is recorded and the loop moves on.
pub struct CreateIssuesUseCase<'a> {
    pub api_service: &'a dyn ApiService,
}

impl CreateIssuesUseCase<'_> {
    #[tracing::instrument(skip_all, fields(repository_path = %repository_path, issues = issues.len()))]
    pub async fn run(
        &self,
        repository_path: &RepositoryPath,
        issues: &[IssueSpec],
    ) -> IssueCreationReport {
        let (owner, name) = (repository_path.owner(), repository_path.name());

        let mut outcomes = Vec::with_capacity(issues.len());
        for spec in issues {
            let result = match self
                .api_service
                .issues_create(owner, name, &spec.title, &spec.body, &spec.labels)
                .await
            {
                Ok(issue) => {
                    tracing::info!(number = issue.number, title = %spec.title, "issue created");
                    Ok(issue.number)
                }
                Err(e) => {
                    tracing::error!(title = %spec.title, error = %e, "issue creation failed");
                    Err(e.to_string())
                }
            };

            outcomes.push(IssueCreationOutcome {
                title: spec.title.clone(),
                result,
            });
        }

        IssueCreationReport { outcomes }
    }
}

#[cfg(test)]
mod tests {
    use planbot_ghapi_interface::{types::GhIssue, ApiError, MockApiService};
    use pretty_assertions::assert_eq;

    use super::*;

    fn spec(title: &str) -> IssueSpec {
        IssueSpec::new(title, "body", &["backend"])
    }

    fn issue(number: u64) -> GhIssue {
        GhIssue {
            number,
            ..Default::default()
        }
    }

    fn path() -> RepositoryPath {
        "owner/name".parse().unwrap()
    }

    #[tokio::test]
    async fn creates_every_entry() {
        let mut adapter = MockApiService::new();
        adapter
            .expect_issues_create()
            .once()
            .withf(|owner, name, title, body, labels| {
                owner == "owner"
                    && name == "name"
                    && title == "First"
                    && body == "body"
                    && labels == ["backend".to_string()]
            })
            .return_once(|_, _, _, _, _| Ok(issue(1)));
        adapter
            .expect_issues_create()
            .once()
            .withf(|_, _, title, _, _| title == "Second")
            .return_once(|_, _, _, _, _| Ok(issue(2)));

        let report = CreateIssuesUseCase {
            api_service: &adapter,
        }
        .run(&path(), &[spec("First"), spec("Second")])
        .await;

        assert_eq!(
            report.outcomes,
            vec![
                IssueCreationOutcome {
                    title: "First".into(),
                    result: Ok(1),
                },
                IssueCreationOutcome {
                    title: "Second".into(),
                    result: Ok(2),
                },
            ]
        );
        assert_eq!(report.created_count(), 2);
        assert_eq!(report.failed_count(), 0);
    }

    #[tokio::test]
    async fn continues_past_a_failing_issue() {
        let mut adapter = MockApiService::new();
        adapter
            .expect_issues_create()
            .once()
            .withf(|_, _, title, _, _| title == "First")
            .return_once(|_, _, _, _, _| Ok(issue(1)));
        adapter
            .expect_issues_create()
            .once()
            .withf(|_, _, title, _, _| title == "Second")
            .return_once(|_, _, _, _, _| {
                Err(ApiError::ImplementationError {
                    source: "boom".into(),
                })
            });
        adapter
            .expect_issues_create()
            .once()
            .withf(|_, _, title, _, _| title == "Third")
            .return_once(|_, _, _, _, _| Ok(issue(3)));

        let report = CreateIssuesUseCase {
            api_service: &adapter,
        }
        .run(&path(), &[spec("First"), spec("Second"), spec("Third")])
        .await;

        assert_eq!(report.created_count(), 2);
        assert_eq!(report.failed_count(), 1);
        assert_eq!(report.outcomes[1].result, Err("boom".to_string()));
        assert_eq!(report.outcomes[2].result, Ok(3));
    }

    #[tokio::test]
    async fn duplicate_runs_create_duplicate_issues() {
        let mut adapter = MockApiService::new();
        adapter
            .expect_issues_create()
            .times(2)
            .returning(|_, _, _, _, _| Ok(issue(1)));

        let use_case = CreateIssuesUseCase {
            api_service: &adapter,
        };
        let first = use_case.run(&path(), &[spec("First")]).await;
        let second = use_case.run(&path(), &[spec("First")]).await;

        assert_eq!(first.created_count(), 1);
        assert_eq!(second.created_count(), 1);
    }
}
