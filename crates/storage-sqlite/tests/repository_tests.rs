//! Integration tests for the SQLite repositories against a temporary database.

use std::sync::Arc;

use diesel::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tempfile::TempDir;

use pocketplan_core::accounts::{Account, AccountRepositoryTrait, AccountType};
use pocketplan_core::categories::{
    CategoryOverride, CategoryOverrideRepositoryTrait, CategoryResolver, CategoryResolverTrait,
};
use pocketplan_core::goals::{Goal, GoalRepositoryTrait};
use pocketplan_core::planning::{
    AllocationValidator, FundsAvailabilityCalculator, FundsAvailabilityTrait,
    GoalPlanningService, GoalPlanningServiceTrait,
};
use pocketplan_core::settings::{CategorizationConfig, PlanningConfig, UserPreferenceRepositoryTrait};
use pocketplan_storage_sqlite::accounts::{AccountRepository, NewAccountDB};
use pocketplan_storage_sqlite::categories::{CategoryOverrideRepository, NewCategoryOverrideDB};
use pocketplan_storage_sqlite::goals::{GoalRepository, NewGoalDB};
use pocketplan_storage_sqlite::schema::{accounts, category_overrides, goals, user_preferences};
use pocketplan_storage_sqlite::{create_pool, get_connection, run_migrations, DbPool, Error};

// ============== Fixtures ==============

struct TestDb {
    _dir: TempDir,
    pool: Arc<DbPool>,
}

fn setup() -> TestDb {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("app.db");
    let pool = create_pool(db_path.to_str().unwrap()).unwrap();
    run_migrations(&pool).unwrap();
    TestDb { _dir: dir, pool }
}

fn insert_override(db: &TestDb, row: CategoryOverride) {
    let mut conn = get_connection(&db.pool).unwrap();
    diesel::insert_into(category_overrides::table)
        .values(NewCategoryOverrideDB::from(row))
        .execute(&mut conn)
        .unwrap();
}

fn insert_account(db: &TestDb, account: Account) {
    let mut conn = get_connection(&db.pool).unwrap();
    diesel::insert_into(accounts::table)
        .values(NewAccountDB::from(account))
        .execute(&mut conn)
        .unwrap();
}

fn insert_goal(db: &TestDb, goal: Goal) {
    let mut conn = get_connection(&db.pool).unwrap();
    diesel::insert_into(goals::table)
        .values(NewGoalDB::from(goal))
        .execute(&mut conn)
        .unwrap();
}

fn set_buffer(db: &TestDb, user: &str, buffer: Option<&str>) {
    let mut conn = get_connection(&db.pool).unwrap();
    diesel::insert_into(user_preferences::table)
        .values((
            user_preferences::user_id.eq(user),
            user_preferences::safety_buffer.eq(buffer),
        ))
        .execute(&mut conn)
        .unwrap();
}

fn user_override(user: &str, provider_id: &str, name: &str) -> CategoryOverride {
    CategoryOverride {
        id: uuid::Uuid::new_v4().to_string(),
        user_id: Some(user.to_string()),
        provider_category_id: provider_id.to_string(),
        category_name: name.to_string(),
        is_system_defined: false,
        is_essential: false,
    }
}

fn system_default(provider_id: &str, name: &str) -> CategoryOverride {
    CategoryOverride {
        id: uuid::Uuid::new_v4().to_string(),
        user_id: None,
        provider_category_id: provider_id.to_string(),
        category_name: name.to_string(),
        is_system_defined: true,
        is_essential: true,
    }
}

fn checking(id: &str, user: &str, balance: Decimal, available: Option<Decimal>) -> Account {
    Account {
        id: id.to_string(),
        user_id: user.to_string(),
        name: format!("Checking {}", id),
        account_type: AccountType::Depository,
        account_subtype: Some("checking".to_string()),
        balance,
        available_balance: available,
        is_active: true,
    }
}

fn goal(id: &str, target: Decimal, priority: Option<i32>, is_active: bool) -> Goal {
    Goal {
        id: id.to_string(),
        user_id: "user-1".to_string(),
        name: id.to_string(),
        target_amount: target,
        current_amount: Decimal::ZERO,
        priority,
        is_active,
    }
}

#[test]
fn migrations_are_idempotent() {
    let db = setup();
    run_migrations(&db.pool).unwrap();
    let mut conn = get_connection(&db.pool).unwrap();
    let count: i64 = category_overrides::table.count().get_result(&mut conn).unwrap();
    assert_eq!(count, 0);
}

// ============== Category overrides ==============

#[tokio::test]
async fn override_and_default_lookups() {
    let db = setup();
    insert_override(&db, user_override("user-1", "13005000", "Date Nights"));
    insert_override(&db, system_default("13005000", "Food & Dining"));
    let repo = CategoryOverrideRepository::new(db.pool.clone());

    let found = repo.find_override_category("user-1", "13005000").await.unwrap();
    assert_eq!(found.unwrap().category_name, "Date Nights");

    assert!(repo
        .find_override_category("user-2", "13005000")
        .await
        .unwrap()
        .is_none());

    let default = repo.find_system_default_category("13005000").await.unwrap().unwrap();
    assert_eq!(default.category_name, "Food & Dining");
    assert!(default.is_system_defined);
    assert!(default.user_id.is_none());

    assert!(repo.find_system_default_category("00000000").await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_user_override_is_rejected() {
    let db = setup();
    insert_override(&db, user_override("user-1", "13005000", "Date Nights"));

    let mut conn = get_connection(&db.pool).unwrap();
    let result = diesel::insert_into(category_overrides::table)
        .values(NewCategoryOverrideDB::from(user_override("user-1", "13005000", "Dining")))
        .execute(&mut conn);
    assert!(result.is_err());

    // other users may map the same provider category
    drop(conn);
    insert_override(&db, user_override("user-2", "13005000", "Dining"));
}

#[tokio::test]
async fn resolver_over_sqlite_respects_precedence() {
    let db = setup();
    insert_override(&db, user_override("user-1", "13005000", "Date Nights"));
    insert_override(&db, system_default("13005000", "Restaurants"));
    let resolver = CategoryResolver::new(
        Arc::new(CategoryOverrideRepository::new(db.pool.clone())),
        Arc::new(CategorizationConfig {
            db_mapping_enabled: true,
        }),
    );

    assert_eq!(
        resolver.resolve("user-1", Some("13005000"), Some("Pizza")).await,
        "Date Nights"
    );
    assert_eq!(
        resolver.resolve("user-2", Some("13005000"), Some("Pizza")).await,
        "Restaurants"
    );
    assert_eq!(
        resolver.resolve("user-2", Some("99999999"), Some("Pizza")).await,
        "Food & Dining"
    );
}

// ============== Accounts ==============

#[tokio::test]
async fn lists_only_active_liquid_accounts() {
    let db = setup();
    insert_account(&db, checking("a1", "user-1", dec!(1500.25), Some(dec!(1400))));
    let mut savings = checking("a2", "user-1", dec!(800), None);
    savings.account_subtype = Some("Savings".to_string());
    insert_account(&db, savings);
    let mut closed = checking("a3", "user-1", dec!(9999), None);
    closed.is_active = false;
    insert_account(&db, closed);
    let mut card = checking("a4", "user-1", dec!(-250), None);
    card.account_type = AccountType::Credit;
    card.account_subtype = Some("credit card".to_string());
    insert_account(&db, card);
    insert_account(&db, checking("b1", "user-2", dec!(5000), None));

    let repo = AccountRepository::new(db.pool.clone());
    let listed = repo.list_liquid_accounts("user-1").await.unwrap();

    let ids: Vec<&str> = listed.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["a1", "a2"]);
    assert_eq!(listed[0].available_balance, Some(dec!(1400)));
    assert_eq!(listed[1].available_balance, None);
}

#[tokio::test]
async fn corrupt_balance_surfaces_validation_error() {
    let db = setup();
    let mut conn = get_connection(&db.pool).unwrap();
    diesel::insert_into(accounts::table)
        .values(NewAccountDB {
            id: "bad".to_string(),
            user_id: "user-1".to_string(),
            name: "Bad".to_string(),
            account_type: "DEPOSITORY".to_string(),
            account_subtype: Some("checking".to_string()),
            balance: "not-a-number".to_string(),
            available_balance: None,
            is_active: true,
        })
        .execute(&mut conn)
        .unwrap();
    drop(conn);

    let repo = AccountRepository::new(db.pool.clone());
    let result = repo.list_liquid_accounts("user-1").await;
    assert!(matches!(result, Err(Error::Validation(_))));
}

// ============== Goals and preferences ==============

#[tokio::test]
async fn lists_active_goals_with_decimal_amounts() {
    let db = setup();
    insert_goal(&db, goal("house", dec!(25000.50), Some(1), true));
    insert_goal(&db, goal("old", dec!(100), Some(2), false));

    let repo = GoalRepository::new(db.pool.clone());
    let listed = repo.list_active_goals("user-1").await.unwrap();

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, "house");
    assert_eq!(listed[0].target_amount, dec!(25000.50));
    assert!(repo.list_active_goals("user-2").await.unwrap().is_empty());
}

#[tokio::test]
async fn buffer_preference_reads_missing_null_and_value() {
    let db = setup();
    set_buffer(&db, "user-1", Some("750.00"));
    set_buffer(&db, "user-2", None);
    let repo = pocketplan_storage_sqlite::settings::UserPreferenceRepository::new(db.pool.clone());

    assert_eq!(
        repo.get_user_buffer_preference("user-1").await.unwrap(),
        Some(dec!(750))
    );
    assert_eq!(repo.get_user_buffer_preference("user-2").await.unwrap(), None);
    assert_eq!(repo.get_user_buffer_preference("nobody").await.unwrap(), None);
}

// ============== Full pipeline ==============

#[tokio::test]
async fn planning_pipeline_over_sqlite() {
    let db = setup();
    insert_account(&db, checking("a1", "user-1", dec!(9000), Some(dec!(8500))));
    set_buffer(&db, "user-1", Some("500"));
    insert_goal(&db, goal("emergency", dec!(5000), Some(1), true));
    insert_goal(&db, goal("car", dec!(2000), Some(2), true));
    insert_goal(&db, goal("house", dec!(10000), None, true));

    let funds: Arc<dyn FundsAvailabilityTrait> = Arc::new(FundsAvailabilityCalculator::new(
        Arc::new(AccountRepository::new(db.pool.clone())),
        Arc::new(pocketplan_storage_sqlite::settings::UserPreferenceRepository::new(
            db.pool.clone(),
        )),
        PlanningConfig::default(),
    ));
    assert_eq!(funds.available_funds("user-1").await, dec!(8000));
    // no accounts and no preference row: default buffer, never negative
    assert_eq!(funds.available_funds("user-2").await, Decimal::ZERO);

    let service = GoalPlanningService::new(
        funds.clone(),
        Arc::new(GoalRepository::new(db.pool.clone())),
        Arc::new(AllocationValidator::new(funds)),
    );
    let proposal = service.propose("user-1").await;

    assert_eq!(proposal.plan.get("emergency"), Some(dec!(5000)));
    assert_eq!(proposal.plan.get("car"), Some(dec!(2000)));
    assert_eq!(proposal.plan.get("house"), Some(dec!(1000)));
    assert_eq!(proposal.unallocated, Decimal::ZERO);
    assert!(proposal.is_valid);
}
