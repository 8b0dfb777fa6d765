//! Collection pass tests over a scripted directory
//!
//! These cover paging, team scoping, label mapping and fail-fast behaviour.

#[cfg(test)]
mod tests {
    use crate::common::{ScriptedDirectory, Step, UserFactory, page};
    use pagerduty_exporter::collector::LIST_USERS_OPERATION;
    use pagerduty_exporter::{ExporterError, PagerDutyApiCounter, UserCollector, UserInfoGauge};
    use std::sync::Arc;

    fn collector_for(
        directory: Arc<ScriptedDirectory>,
        list_limit: u32,
    ) -> (UserCollector, PagerDutyApiCounter) {
        let counter = PagerDutyApiCounter::new().unwrap();
        let collector = UserCollector::new(
            directory,
            UserInfoGauge::new().unwrap(),
            Arc::new(counter.clone()),
        )
        .with_list_limit(list_limit);
        (collector, counter)
    }

    // ==================== Paging ====================

    /// Page size 2: U1,U2 then U3 gives three series and two API calls
    #[tokio::test]
    async fn test_three_users_across_two_pages() {
        let directory = Arc::new(ScriptedDirectory::new(vec![
            Step::Page(page(
                vec![UserFactory::create("U1"), UserFactory::create("U2")],
                2,
                true,
            )),
            Step::Page(page(vec![UserFactory::create("U3")], 2, false)),
        ]));
        let (collector, counter) = collector_for(Arc::clone(&directory), 2);

        collector.collect().await.unwrap().apply().unwrap();

        let published = collector.gauge().snapshot();
        assert_eq!(published.len(), 3);
        for (sample, id) in published.iter().zip(["U1", "U2", "U3"]) {
            let user = UserFactory::create(id);
            assert_eq!(sample.user_id, user.id);
            assert_eq!(sample.user_name, user.name);
            assert_eq!(sample.user_mail, user.email);
            assert_eq!(sample.user_avatar, user.avatar_url);
            assert_eq!(sample.user_color, user.color);
            assert_eq!(sample.user_job_title, user.job_title);
            assert_eq!(sample.user_role, user.role);
            assert_eq!(sample.user_timezone, user.time_zone);
            assert_eq!(sample.user_team, "");
        }
        assert_eq!(counter.get(LIST_USERS_OPERATION), 2);
        assert_eq!(directory.offsets(), vec![0, 2]);
    }

    /// more=true,true,false means exactly three calls at 0, limit, 2*limit
    #[tokio::test]
    async fn test_pagination_terminates_on_last_page() {
        let directory = Arc::new(ScriptedDirectory::new(vec![
            Step::Page(page(vec![UserFactory::create("U1")], 25, true)),
            Step::Page(page(vec![UserFactory::create("U2")], 25, true)),
            Step::Page(page(vec![UserFactory::create("U3")], 25, false)),
        ]));
        let (collector, counter) = collector_for(Arc::clone(&directory), 25);

        let publication = collector.collect().await.unwrap();

        assert_eq!(publication.len(), 3);
        assert_eq!(directory.offsets(), vec![0, 25, 50]);
        assert_eq!(counter.get(LIST_USERS_OPERATION), 3);
    }

    /// Published count equals the users returned over all pages
    #[tokio::test]
    async fn test_sample_count_matches_user_count() {
        let pages: Vec<Step> = (0..5)
            .map(|p| {
                let users = (0..4)
                    .map(|u| UserFactory::create(&format!("P{}U{}", p, u)))
                    .collect();
                Step::Page(page(users, 4, p < 4))
            })
            .collect();
        let directory = Arc::new(ScriptedDirectory::new(pages));
        let (collector, _) = collector_for(Arc::clone(&directory), 4);

        collector.collect().await.unwrap().apply().unwrap();

        assert_eq!(collector.gauge().len(), 20);
        assert_eq!(directory.offsets(), vec![0, 4, 8, 12, 16]);
    }

    #[tokio::test]
    async fn test_empty_directory_publishes_nothing() {
        let directory = Arc::new(ScriptedDirectory::new(vec![Step::Page(page(
            vec![],
            100,
            false,
        ))]));
        let (collector, counter) = collector_for(directory, 100);

        let publication = collector.collect().await.unwrap();
        assert!(publication.is_empty());
        publication.apply().unwrap();

        assert!(collector.gauge().is_empty());
        assert_eq!(counter.get(LIST_USERS_OPERATION), 1);
    }

    // ==================== Team scoping and labels ====================

    #[tokio::test]
    async fn test_team_filter_is_sent_on_every_page() {
        let directory = Arc::new(ScriptedDirectory::new(vec![
            Step::Page(page(vec![UserFactory::create("U1")], 1, true)),
            Step::Page(page(vec![UserFactory::create("U2")], 1, false)),
        ]));
        let (collector, _) = collector_for(Arc::clone(&directory), 1);
        let collector = collector.with_team_filter(vec!["PQ9K7I8".to_string()]);

        collector.collect().await.unwrap();

        let requests = directory.requests();
        assert_eq!(requests.len(), 2);
        assert!(
            requests
                .iter()
                .all(|r| r.team_ids == vec!["PQ9K7I8".to_string()])
        );
    }

    #[tokio::test]
    async fn test_no_team_filter_means_no_scoping() {
        let directory = Arc::new(ScriptedDirectory::new(vec![Step::Page(page(
            vec![UserFactory::create("U1")],
            100,
            false,
        ))]));
        let (collector, _) = collector_for(Arc::clone(&directory), 100);

        collector.collect().await.unwrap();

        assert!(directory.requests()[0].team_ids.is_empty());
    }

    #[tokio::test]
    async fn test_multi_team_user_label() {
        let directory = Arc::new(ScriptedDirectory::new(vec![Step::Page(page(
            vec![
                UserFactory::with_teams("U1", &["A", "B"]),
                UserFactory::with_teams("U2", &["B", "A"]),
            ],
            100,
            false,
        ))]));
        let (collector, _) = collector_for(directory, 100);

        let publication = collector.collect().await.unwrap();

        assert_eq!(publication.samples()[0].user_team, "A,B");
        assert_eq!(publication.samples()[1].user_team, "B,A");
    }

    /// A user gone from the directory disappears from the next pass
    #[tokio::test]
    async fn test_second_pass_replaces_first() {
        let directory = Arc::new(ScriptedDirectory::new(vec![
            Step::Page(page(
                vec![UserFactory::create("U1"), UserFactory::create("U2")],
                100,
                false,
            )),
            Step::Page(page(vec![UserFactory::create("U2")], 100, false)),
        ]));
        let (collector, _) = collector_for(directory, 100);

        collector.collect().await.unwrap().apply().unwrap();
        assert_eq!(collector.gauge().len(), 2);

        collector.collect().await.unwrap().apply().unwrap();
        let ids: Vec<_> = collector
            .gauge()
            .snapshot()
            .into_iter()
            .map(|s| s.user_id)
            .collect();
        assert_eq!(ids, vec!["U2".to_string()]);
    }

    // ==================== Fail fast ====================

    #[tokio::test]
    async fn test_error_on_first_page_publishes_nothing() {
        let directory = Arc::new(ScriptedDirectory::new(vec![Step::fail(
            401,
            "Authentication required",
        )]));
        let (collector, counter) = collector_for(directory, 100);

        let err = collector.collect().await.unwrap_err();

        assert!(matches!(err, ExporterError::Api { status: 401, .. }));
        assert!(collector.gauge().is_empty());
        assert_eq!(counter.get(LIST_USERS_OPERATION), 1);
    }

    #[tokio::test]
    async fn test_error_mid_pass_leaves_previous_vector() {
        let first_pass = ScriptedDirectory::new(vec![Step::Page(page(
            vec![UserFactory::create("OLD1"), UserFactory::create("OLD2")],
            100,
            false,
        ))]);
        let gauge = UserInfoGauge::new().unwrap();
        let counter = Arc::new(PagerDutyApiCounter::new().unwrap());

        UserCollector::new(Arc::new(first_pass), gauge.clone(), counter.clone())
            .collect()
            .await
            .unwrap()
            .apply()
            .unwrap();
        assert_eq!(gauge.len(), 2);

        let failing_pass = ScriptedDirectory::new(vec![
            Step::Page(page(vec![UserFactory::create("NEW1")], 1, true)),
            Step::Page(page(vec![UserFactory::create("NEW2")], 1, true)),
            Step::fail(503, "Service Unavailable"),
        ]);
        let result = UserCollector::new(Arc::new(failing_pass), gauge.clone(), counter.clone())
            .with_list_limit(1)
            .collect()
            .await;

        assert!(result.is_err());
        let ids: Vec<_> = gauge.snapshot().into_iter().map(|s| s.user_id).collect();
        assert_eq!(ids, vec!["OLD1".to_string(), "OLD2".to_string()]);
        assert_eq!(counter.get(LIST_USERS_OPERATION), 4);
    }
}
