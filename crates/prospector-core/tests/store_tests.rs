use prospector_core::{
    MemoryStore, Node, Predicate, StoreError, SynBioHubClient, Triple, TriplePattern, TripleStore,
};

// MemoryStore pattern shapes
mod memory {
    use super::*;

    fn store() -> MemoryStore {
        MemoryStore::new(vec![
            Triple::new("urn:a", "urn:p", "urn:b"),
            Triple::new("urn:a", "urn:q", "urn:c"),
            Triple::new("urn:d", "urn:p", "urn:b"),
        ])
    }

    #[tokio::test]
    async fn test_subjects_for_predicate_object() {
        let found = store()
            .query(&TriplePattern::subjects_of("urn:p", "urn:b"))
            .await
            .unwrap();
        let subjects: Vec<&str> = found.iter().map(|t| t.subject.as_str()).collect();
        assert_eq!(subjects, vec!["urn:a", "urn:d"]);
    }

    #[tokio::test]
    async fn test_objects_for_subject_predicate() {
        let found = store()
            .query(&TriplePattern::objects_of("urn:a", "urn:q"))
            .await
            .unwrap();
        assert_eq!(found, vec![Triple::new("urn:a", "urn:q", "urn:c")]);
    }

    #[tokio::test]
    async fn test_existence_check() {
        let store = store();
        let found = store
            .query(&TriplePattern::exact("urn:a", "urn:p", "urn:b"))
            .await
            .unwrap();
        assert_eq!(found.len(), 1);

        let missing = store
            .query(&TriplePattern::exact("urn:a", "urn:p", "urn:zzz"))
            .await
            .unwrap();
        assert!(missing.is_empty());
    }

    #[tokio::test]
    async fn test_empty_result_is_not_an_error() {
        let found = store()
            .query(&TriplePattern::about("urn:nowhere"))
            .await
            .unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_unbound_pattern_is_rejected() {
        let result = store().query(&TriplePattern::default()).await;
        assert!(matches!(result, Err(StoreError::UnsupportedPattern)));
    }
}

// SynBioHubClient construction (network paths are exercised against a live
// instance, not here)
mod synbiohub {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = SynBioHubClient::new("https://hub.sd2e.org");
        assert_eq!(client.server(), "https://hub.sd2e.org");
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_client_strips_trailing_slash() {
        let client = SynBioHubClient::new("https://hub.sd2e.org/");
        assert_eq!(client.server(), "https://hub.sd2e.org");
    }

    #[tokio::test]
    async fn test_query_before_login_is_rejected() {
        let client = SynBioHubClient::new("https://hub.sd2e.org");
        let result = client
            .query(&TriplePattern::about("urn:anything"))
            .await;
        assert!(matches!(result, Err(StoreError::NotAuthenticated)));

        let result = client
            .implementations(&Node::new("urn:anything"), None)
            .await;
        assert!(matches!(result, Err(StoreError::NotAuthenticated)));
    }
}

#[tokio::test]
async fn test_implementations_includes_titles() {
    let store = MemoryStore::new(vec![
        Triple::new("urn:impl-1", Predicate::Built.node(), "urn:design"),
        Triple::new("urn:impl-1", Predicate::Title.node(), "Experiment 1"),
        Triple::new("urn:impl-2", Predicate::Built.node(), "urn:design"),
        Triple::new("urn:impl-2", Predicate::Title.node(), "Experiment 2"),
        Triple::new("urn:untitled", Predicate::Built.node(), "urn:design"),
    ]);
    let impls = store
        .implementations(&Node::new("urn:design"), None)
        .await
        .unwrap();
    // Implementations without a title do not produce rows
    assert_eq!(impls.len(), 2);
    assert_eq!(impls[0].title, "Experiment 1");
    assert_eq!(impls[1].title, "Experiment 2");
}
