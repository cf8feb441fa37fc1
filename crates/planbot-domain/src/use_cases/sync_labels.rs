use std::collections::HashMap;

use planbot_ghapi_interface::{types::GhLabel, ApiService};
use planbot_models::{LabelSpec, RepositoryPath};

use crate::Result;

/// Action taken for a single label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSyncAction {
    /// The label was absent from the snapshot and got created.
    Created,
    /// The label was present in the snapshot and got updated in place.
    Updated,
}

/// Outcome of one label synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSyncOutcome {
    /// Label name.
    pub name: String,
    /// Action attempted.
    pub action: LabelSyncAction,
    /// Error message, if the call failed.
    pub error: Option<String>,
}

impl LabelSyncOutcome {
    /// Did the call succeed?
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Per-label outcomes, in table order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LabelSyncReport {
    /// Outcomes.
    pub outcomes: Vec<LabelSyncOutcome>,
}

impl LabelSyncReport {
    /// Count of successfully created labels.
    pub fn created_count(&self) -> usize {
        self.count(LabelSyncAction::Created)
    }

    /// Count of successfully updated labels.
    pub fn updated_count(&self) -> usize {
        self.count(LabelSyncAction::Updated)
    }

    /// Count of failed labels.
    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.succeeded()).count()
    }

    fn count(&self, action: LabelSyncAction) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.succeeded() && o.action == action)
            .count()
    }
}

/// Synchronize a label table against a repository.
///
/// The current label set is fetched once; each entry then issues exactly one
/// create or update, chosen by exact-name membership in that snapshot. A
/// failed call is recorded in the report and does not stop the loop.
pub struct SyncLabelsUseCase<'a> {
    pub api_service: &'a dyn ApiService,
}

impl SyncLabelsUseCase<'_> {
    #[tracing::instrument(skip_all, fields(repository_path = %repository_path, labels = labels.len()))]
    pub async fn run(
        &self,
        repository_path: &RepositoryPath,
        labels: &[LabelSpec],
    ) -> Result<LabelSyncReport> {
        let (owner, name) = (repository_path.owner(), repository_path.name());

        // Snapshot failure is fatal: without it there is no create-or-update decision.
        let existing: HashMap<String, GhLabel> = self
            .api_service
            .labels_list(owner, name)
            .await?
            .into_iter()
            .map(|label| (label.name.clone(), label))
            .collect();

        let mut outcomes = Vec::with_capacity(labels.len());
        for spec in labels {
            let target = GhLabel {
                name: spec.name.clone(),
                color: spec.color.clone(),
                description: Some(spec.description.clone()),
            };
            let action = if existing.contains_key(&spec.name) {
                LabelSyncAction::Updated
            } else {
                LabelSyncAction::Created
            };

            let result = match action {
                LabelSyncAction::Created => {
                    self.api_service.labels_create(owner, name, &target).await
                }
                LabelSyncAction::Updated => {
                    self.api_service.labels_update(owner, name, &target).await
                }
            };

            let error = match result {
                Ok(()) => {
                    tracing::info!(label = %spec.name, ?action, "label synchronized");
                    None
                }
                Err(e) => {
                    tracing::error!(label = %spec.name, error = %e, "label synchronization failed");
                    Some(e.to_string())
                }
            };

            outcomes.push(LabelSyncOutcome {
                name: spec.name.clone(),
                action,
                error,
            });
        }

        Ok(LabelSyncReport { outcomes })
    }
}

#[cfg(test)]
mod tests {
    use planbot_ghapi_interface::{ApiError, MockApiService};
    use pretty_assertions::assert_eq;

    use super::*;

    fn spec(name: &str, color: &str) -> LabelSpec {
        LabelSpec::new(name, color, "desc")
    }

    fn existing(name: &str) -> GhLabel {
        GhLabel {
            name: name.into(),
            color: "ffffff".into(),
            description: None,
        }
    }

    fn path() -> RepositoryPath {
        "owner/name".parse().unwrap()
    }

    #[tokio::test]
    async fn creates_labels_absent_from_snapshot() -> Result<()> {
        let mut adapter = MockApiService::new();
        adapter
            .expect_labels_list()
            .once()
            .withf(|owner, name| owner == "owner" && name == "name")
            .return_once(|_, _| Ok(vec![]));
        adapter
            .expect_labels_create()
            .once()
            .withf(|_, _, label| {
                label.name == "backend"
                    && label.color == "0366d6"
                    && label.description.as_deref() == Some("desc")
            })
            .return_once(|_, _, _| Ok(()));

        let report = SyncLabelsUseCase {
            api_service: &adapter,
        }
        .run(&path(), &[spec("backend", "0366d6")])
        .await?;

        assert_eq!(report.created_count(), 1);
        assert_eq!(report.updated_count(), 0);
        assert_eq!(report.failed_count(), 0);

        Ok(())
    }

    #[tokio::test]
    async fn updates_labels_present_in_snapshot() -> Result<()> {
        let mut adapter = MockApiService::new();
        adapter
            .expect_labels_list()
            .once()
            .return_once(|_, _| Ok(vec![existing("backend")]));
        adapter
            .expect_labels_update()
            .once()
            .withf(|_, _, label| label.name == "backend" && label.color == "0366d6")
            .return_once(|_, _, _| Ok(()));

        let report = SyncLabelsUseCase {
            api_service: &adapter,
        }
        .run(&path(), &[spec("backend", "0366d6")])
        .await?;

        assert_eq!(report.created_count(), 0);
        assert_eq!(report.updated_count(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn one_call_per_entry_never_both() -> Result<()> {
        let mut adapter = MockApiService::new();
        adapter
            .expect_labels_list()
            .once()
            .return_once(|_, _| Ok(vec![existing("frontend")]));
        adapter
            .expect_labels_create()
            .once()
            .withf(|_, _, label| label.name == "backend")
            .return_once(|_, _, _| Ok(()));
        adapter
            .expect_labels_update()
            .once()
            .withf(|_, _, label| label.name == "frontend")
            .return_once(|_, _, _| Ok(()));

        let report = SyncLabelsUseCase {
            api_service: &adapter,
        }
        .run(
            &path(),
            &[spec("backend", "0366d6"), spec("frontend", "fbca04")],
        )
        .await?;

        assert_eq!(
            report.outcomes,
            vec![
                LabelSyncOutcome {
                    name: "backend".into(),
                    action: LabelSyncAction::Created,
                    error: None,
                },
                LabelSyncOutcome {
                    name: "frontend".into(),
                    action: LabelSyncAction::Updated,
                    error: None,
                },
            ]
        );

        Ok(())
    }

    #[tokio::test]
    async fn continues_past_a_failing_label() -> Result<()> {
        let mut adapter = MockApiService::new();
        adapter
            .expect_labels_list()
            .once()
            .return_once(|_, _| Ok(vec![]));
        adapter
            .expect_labels_create()
            .once()
            .withf(|_, _, label| label.name == "ai")
            .return_once(|_, _, _| {
                Err(ApiError::ImplementationError {
                    source: "invalid color".into(),
                })
            });
        adapter
            .expect_labels_create()
            .once()
            .withf(|_, _, label| label.name == "docs")
            .return_once(|_, _, _| Ok(()));

        let report = SyncLabelsUseCase {
            api_service: &adapter,
        }
        .run(&path(), &[spec("ai", "a2eeef"), spec("docs", "d4c5f9")])
        .await?;

        assert_eq!(report.created_count(), 1);
        assert_eq!(report.failed_count(), 1);
        assert!(!report.outcomes[0].succeeded());
        assert!(report.outcomes[1].succeeded());

        Ok(())
    }

    #[tokio::test]
    async fn snapshot_failure_is_fatal() {
        let mut adapter = MockApiService::new();
        adapter.expect_labels_list().once().return_once(|_, _| {
            Err(ApiError::ImplementationError {
                source: "network down".into(),
            })
        });

        let result = SyncLabelsUseCase {
            api_service: &adapter,
        }
        .run(&path(), &[spec("backend", "0366d6")])
        .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn second_run_issues_only_updates() -> Result<()> {
        let mut adapter = MockApiService::new();
        adapter.expect_labels_list().once().return_once(|_, _| {
            Ok(vec![existing("backend"), existing("frontend")])
        });
        adapter
            .expect_labels_update()
            .times(2)
            .returning(|_, _, _| Ok(()));

        let report = SyncLabelsUseCase {
            api_service: &adapter,
        }
        .run(
            &path(),
            &[spec("backend", "0366d6"), spec("frontend", "fbca04")],
        )
        .await?;

        assert_eq!(report.created_count(), 0);
        assert_eq!(report.updated_count(), 2);

        Ok(())
    }
}
