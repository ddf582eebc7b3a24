use super::*;
use crate::contract::{ContractParty, ValidationReason};
use crate::config::NumberingConfig;
use crate::store::InMemoryStore;
use chrono::NaiveDate;

fn registry() -> ContractRegistry<InMemoryStore> {
    ContractRegistry::new(Arc::new(InMemoryStore::new()), &RegistryConfig::default())
}

fn titled(title: &str) -> CreateContractOptions {
    CreateContractOptions {
        title: title.to_string(),
        ..CreateContractOptions::default()
    }
}

#[tokio::test]
async fn test_create_assigns_consecutive_numbers() {
    let registry = registry();
    let first = registry.create(titled("First")).await.unwrap();
    let second = registry.create(titled("Second")).await.unwrap();
    assert_eq!(first.number(), Some(1000));
    assert_eq!(second.number(), Some(1001));
    assert!(first.id.is_some());
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn test_create_with_explicit_number() {
    let registry = registry();
    let mut options = titled("Explicit");
    options.number = Some(1000);
    assert_eq!(registry.create(options).await.unwrap().number(), Some(1000));

    let mut options = titled("Skipping");
    options.number = Some(1005);
    let err = registry.create(options).await.unwrap_err();
    assert_eq!(
        err.as_validation().map(|v| &v.reason),
        Some(&ValidationReason::NotConsecutive {
            expected: 1001,
            actual: 1005
        })
    );
    assert_eq!(registry.list(&ContractFilter::new()).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_concurrent_creates_yield_contiguous_run() {
    let registry = Arc::new(registry());
    let mut handles = Vec::new();
    for i in 0..20 {
        let writer = Arc::clone(&registry);
        handles.push(tokio::spawn(async move {
            writer.create(titled(&format!("Contract {i}"))).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let numbers: Vec<u32> = registry
        .list(&ContractFilter::new())
        .await
        .unwrap()
        .iter()
        .filter_map(Contract::number)
        .collect();
    assert_eq!(numbers, (1000..1020).collect::<Vec<u32>>());
    assert!(registry.check_sequence().await.unwrap().is_consistent());
}

#[tokio::test]
async fn test_create_canonicalizes_classification() {
    let registry = registry();
    let mut options = titled("Lease");
    options.status = Some("Signed".to_string());
    options.contract_type = Some("LEASE".to_string());
    let contract = registry.create(options).await.unwrap();
    assert_eq!(contract.frontmatter.status.as_deref(), Some("signed"));
    assert_eq!(contract.frontmatter.contract_type.as_deref(), Some("lease"));
}

#[tokio::test]
async fn test_list_filters_match_any_spelling_accepted_on_write() {
    let registry = registry();
    let mut options = titled("Lease");
    options.status = Some("SIGNED".to_string());
    options.contract_type = Some("Lease".to_string());
    registry.create(options).await.unwrap();
    registry.create(titled("Unclassified")).await.unwrap();

    for filter in [
        ContractFilter::new().with_status("SIGNED"),
        ContractFilter::new().with_status("signed"),
        ContractFilter::new().with_type("LEASE"),
    ] {
        let found = registry.list(&filter).await.unwrap();
        assert_eq!(found.len(), 1, "{filter:?}");
        assert_eq!(found.first().map(|c| c.title.as_str()), Some("Lease"));
    }
}

#[tokio::test]
async fn test_create_rejects_unknown_status_and_type() {
    let registry = registry();
    let mut options = titled("Bad status");
    options.status = Some("archived".to_string());
    let err = registry.create(options).await.unwrap_err();
    assert!(matches!(err, ContractError::InvalidStatus { .. }));

    let mut options = titled("Bad type");
    options.contract_type = Some("loan".to_string());
    let err = registry.create(options).await.unwrap_err();
    assert!(matches!(err, ContractError::InvalidType { .. }));

    // Rejected creations leave no trace in the numbering
    let next = registry.create(titled("Good")).await.unwrap();
    assert_eq!(next.number(), Some(1000));
}

#[tokio::test]
async fn test_update_keeps_number_unless_given() {
    let registry = registry();
    let created = registry.create(titled("Draft")).await.unwrap();
    let id = created.id.clone().unwrap();

    let updated = registry
        .update(
            &id,
            UpdateContractOptions {
                title: Some("Final".to_string()),
                party_a: Some(ContractParty {
                    co_contractor: Some("Acme GmbH".to_string()),
                    ..ContractParty::default()
                }),
                ..UpdateContractOptions::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.title, "Final");
    assert_eq!(updated.number(), Some(1000));
    assert_eq!(updated.frontmatter.created_at, created.frontmatter.created_at);

    let stored = registry.get(&id).await.unwrap();
    assert_eq!(stored.title, "Final");
    assert_eq!(
        stored.frontmatter.party_a.co_contractor.as_deref(),
        Some("Acme GmbH")
    );
}

#[tokio::test]
async fn test_update_to_taken_number_is_rejected() {
    let registry = registry();
    let first = registry.create(titled("First")).await.unwrap();
    registry.create(titled("Second")).await.unwrap();
    let id = first.id.unwrap();

    let err = registry
        .update(
            &id,
            UpdateContractOptions {
                number: Some(1001),
                ..UpdateContractOptions::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(
        err.as_validation().map(|v| &v.reason),
        Some(&ValidationReason::AlreadyExists)
    );
    assert_eq!(registry.get(&id).await.unwrap().number(), Some(1000));
}

#[tokio::test]
async fn test_update_unknown_contract() {
    let registry = registry();
    let err = registry
        .update("nope", UpdateContractOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ContractError::NotFound(_)));
}

#[tokio::test]
async fn test_get_by_number() {
    let registry = registry();
    registry.create(titled("First")).await.unwrap();
    registry.create(titled("Second")).await.unwrap();
    assert_eq!(registry.get_by_number(1001).await.unwrap().title, "Second");
    assert!(matches!(
        registry.get_by_number(1002).await.unwrap_err(),
        ContractError::NotFound(_)
    ));
}

#[tokio::test]
async fn test_list_and_years_through_registry() {
    let registry = registry();
    for (title, year) in [("Old", 2019), ("New", 2022)] {
        let mut options = titled(title);
        options.date = NaiveDate::from_ymd_opt(year, 6, 1);
        registry.create(options).await.unwrap();
    }
    assert_eq!(registry.years().await.unwrap(), vec![2019, 2020, 2021, 2022]);

    let filtered = registry
        .list(&ContractFilter::new().with_year(2022))
        .await
        .unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered.first().map(|c| c.title.as_str()), Some("New"));
}

#[tokio::test]
async fn test_start_number_from_config() {
    let config = RegistryConfig {
        numbering: NumberingConfig { start_number: 1 },
        ..RegistryConfig::default()
    };
    let registry = ContractRegistry::new(Arc::new(InMemoryStore::new()), &config);
    assert_eq!(registry.create(titled("One")).await.unwrap().number(), Some(1));
}
