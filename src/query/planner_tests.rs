use super::*;
use crate::store::{ContractStoreMut, InMemoryStore};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

async fn seeded(contracts: Vec<Contract>) -> QueryPlanner<InMemoryStore> {
    let store = Arc::new(InMemoryStore::new());
    for contract in contracts {
        store.insert(contract).await.unwrap();
    }
    QueryPlanner::new(store)
}

fn numbers(contracts: &[Contract]) -> Vec<u32> {
    contracts.iter().filter_map(Contract::number).collect()
}

#[test]
fn test_years_between() {
    assert_eq!(years_between(2015, 2019), vec![2015, 2016, 2017, 2018, 2019]);
    assert_eq!(years_between(2020, 2020), vec![2020]);
    assert!(years_between(2021, 2020).is_empty());
}

#[tokio::test]
async fn test_years_on_empty_store() {
    let planner = seeded(Vec::new()).await;
    assert!(planner.years().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_years_span_min_to_max() {
    let planner = seeded(vec![
        Contract::new("b").with_number(1001).with_date(date(2020, 11, 1)),
        Contract::new("a").with_number(1000).with_date(date(2017, 3, 1)),
        Contract::new("undated").with_number(1002),
    ])
    .await;
    assert_eq!(planner.years().await.unwrap(), vec![2017, 2018, 2019, 2020]);
}

#[tokio::test]
async fn test_list_by_status_keeps_native_order() {
    let planner = seeded(vec![
        Contract::new("c").with_number(1003).with_status("DONE"),
        Contract::new("a").with_number(1000).with_status("DONE"),
        Contract::new("b").with_number(1001).with_status("OPEN"),
        Contract::new("d").with_number(1002).with_status("DONE"),
    ])
    .await;
    let found = planner
        .list(&ContractFilter::new().with_status("DONE"))
        .await
        .unwrap();
    assert_eq!(numbers(&found), vec![1000, 1002, 1003]);
    assert!(found
        .iter()
        .all(|c| c.frontmatter.status.as_deref() == Some("DONE")));
}

#[tokio::test]
async fn test_list_by_year() {
    let planner = seeded(vec![
        Contract::new("a").with_number(1000).with_date(date(2017, 12, 31)),
        Contract::new("b").with_number(1001).with_date(date(2018, 1, 1)),
        Contract::new("c").with_number(1002).with_date(date(2018, 12, 31)),
        Contract::new("d").with_number(1003).with_date(date(2019, 1, 1)),
    ])
    .await;
    let found = planner
        .list(&ContractFilter::new().with_year(2018))
        .await
        .unwrap();
    assert_eq!(numbers(&found), vec![1001, 1002]);

    let all = planner.list(&ContractFilter::new()).await.unwrap();
    assert_eq!(numbers(&all), vec![1000, 1001, 1002, 1003]);
}

#[tokio::test]
async fn test_list_combines_criteria() {
    let planner = seeded(vec![
        Contract::new("a")
            .with_number(1000)
            .with_type("nda")
            .with_status("DONE")
            .with_date(date(2018, 5, 1)),
        Contract::new("b")
            .with_number(1001)
            .with_type("lease")
            .with_status("DONE")
            .with_date(date(2018, 6, 1)),
    ])
    .await;
    let filter = ContractFilter::new()
        .with_status("DONE")
        .with_type("nda")
        .with_year(2018);
    assert_eq!(numbers(&planner.list(&filter).await.unwrap()), vec![1000]);
}

#[tokio::test]
async fn test_autocomplete() {
    let mut a = Contract::new("Office lease").with_number(1000);
    a.frontmatter.party_a.co_contractor = Some("ACME Corp".to_string());
    let mut b = Contract::new("Office cleaning").with_number(1001);
    b.frontmatter.party_a.co_contractor = Some("Acme Corp".to_string());
    let c = Contract::new("Office lease").with_number(1002);
    let planner = seeded(vec![a, b, c]).await;

    assert_eq!(
        planner.autocomplete("title", "off", 10).await.unwrap(),
        vec!["Office cleaning".to_string(), "Office lease".to_string()]
    );
    assert_eq!(
        planner.autocomplete("title", "OFF", 1).await.unwrap(),
        vec!["Office cleaning".to_string()]
    );
    assert_eq!(
        planner.autocomplete("coContractorA", "acme", 10).await.unwrap(),
        vec!["ACME Corp".to_string(), "Acme Corp".to_string()]
    );
    assert!(matches!(
        planner.autocomplete("filing", "", 10).await,
        Err(ContractError::AutocompleteDisabled(_))
    ));
}
