use engine::{Engine, EngineError, TransactionFields, TransactionKind, UserFields};
use uuid::Uuid;

fn engine_with_user() -> (Engine, String) {
    let mut engine = Engine::builder().build();
    let id = engine
        .new_user(UserFields {
            name: Some("Alice".to_string()),
            email: Some("alice@mail.com".to_string()),
            cpf: Some("111.222.333-44".to_string()),
            age: Some(28.0),
        })
        .unwrap();
    (engine, id.to_string())
}

fn tx(title: &str, value: f64, kind: &str) -> TransactionFields {
    TransactionFields {
        title: Some(title.to_string()),
        value: Some(value),
        kind: Some(kind.to_string()),
    }
}

fn add(engine: &mut Engine, user_id: &str, title: &str, value: f64, kind: &str) -> String {
    let user = engine
        .new_transaction(user_id, tx(title, value, kind))
        .unwrap();
    user.transactions
        .last()
        .expect("transaction appended")
        .id
        .to_string()
}

#[test]
fn new_user_gets_fresh_id_and_no_transactions() {
    let (mut engine, first) = engine_with_user();
    let second = engine
        .new_user(UserFields {
            name: Some("Bob".to_string()),
            email: Some("bob@mail.com".to_string()),
            cpf: Some("999".to_string()),
            age: Some(40.0),
        })
        .unwrap();

    assert_eq!(engine.users().len(), 2);
    assert_ne!(first, second.to_string());
    assert!(engine.users().all(|u| u.transactions.is_empty()));
}

#[test]
fn missing_field_leaves_store_unchanged() {
    let (mut engine, _) = engine_with_user();
    let complete = UserFields {
        name: Some("Bob".to_string()),
        email: Some("bob@mail.com".to_string()),
        cpf: Some("999".to_string()),
        age: Some(40.0),
    };

    let variants = [
        UserFields {
            name: None,
            ..complete.clone()
        },
        UserFields {
            email: Some(String::new()),
            ..complete.clone()
        },
        UserFields {
            cpf: None,
            ..complete.clone()
        },
        UserFields {
            age: Some(0.0),
            ..complete.clone()
        },
    ];
    for fields in variants {
        let err = engine.new_user(fields).unwrap_err();
        assert!(matches!(err, EngineError::InvalidInput(_)));
    }
    assert_eq!(engine.users().len(), 1);
}

#[test]
fn any_present_age_is_stored() {
    let (mut engine, _) = engine_with_user();
    for age in [30.5, -1.0, 1e12] {
        let id = engine
            .new_user(UserFields {
                name: Some("Bob".to_string()),
                email: Some("bob@mail.com".to_string()),
                cpf: Some("999".to_string()),
                age: Some(age),
            })
            .unwrap();
        assert_eq!(engine.user(&id.to_string()).unwrap().age, age);
    }
    assert_eq!(engine.users().len(), 4);
}

#[test]
fn unknown_user_is_not_found() {
    let (engine, _) = engine_with_user();
    assert!(matches!(
        engine.user(&Uuid::new_v4().to_string()),
        Err(EngineError::UserNotFound(_))
    ));
    assert!(matches!(
        engine.user("garbage"),
        Err(EngineError::UserNotFound(_))
    ));
}

#[test]
fn update_user_clears_transactions() {
    let (mut engine, id) = engine_with_user();
    add(&mut engine, &id, "Salary", 100.0, "income");
    add(&mut engine, &id, "Rent", 40.0, "outcome");

    let user = engine
        .update_user(
            &id,
            UserFields {
                name: Some("Alice B".to_string()),
                email: Some("ab@mail.com".to_string()),
                cpf: None,
                age: Some(29.0),
            },
        )
        .unwrap();

    assert_eq!(user.name, "Alice B");
    assert_eq!(user.age, 29.0);
    assert_eq!(user.cpf, "111.222.333-44");
    assert!(user.transactions.is_empty());
}

#[test]
fn update_user_can_keep_transactions() {
    let mut engine = Engine::builder()
        .clear_transactions_on_update(false)
        .build();
    let id = engine
        .new_user(UserFields {
            name: Some("Alice".to_string()),
            email: Some("alice@mail.com".to_string()),
            cpf: Some("1".to_string()),
            age: Some(28.0),
        })
        .unwrap()
        .to_string();
    add(&mut engine, &id, "Salary", 100.0, "income");

    let user = engine
        .update_user(
            &id,
            UserFields {
                name: Some("A".to_string()),
                email: Some("a@mail.com".to_string()),
                cpf: None,
                age: Some(30.0),
            },
        )
        .unwrap();
    assert_eq!(user.transactions.len(), 1);
}

#[test]
fn delete_user_removes_only_that_user() {
    let (mut engine, first) = engine_with_user();
    let mut ids = vec![first];
    for name in ["Bob", "Carol"] {
        let id = engine
            .new_user(UserFields {
                name: Some(name.to_string()),
                email: Some(format!("{name}@mail.com")),
                cpf: Some("1".to_string()),
                age: Some(20.0),
            })
            .unwrap();
        ids.push(id.to_string());
    }

    let removed = engine.delete_user(&ids[1]).unwrap();
    assert_eq!(removed.name, "Bob");

    let remaining: Vec<_> = engine.users().map(|u| u.id.to_string()).collect();
    assert_eq!(remaining, [ids[0].clone(), ids[2].clone()]);
    assert!(matches!(
        engine.delete_user(&ids[1]),
        Err(EngineError::UserNotFound(_))
    ));
}

#[test]
fn balance_of_mixed_transactions() {
    let (mut engine, id) = engine_with_user();
    add(&mut engine, &id, "Salary", 100.0, "income");
    add(&mut engine, &id, "Groceries", 30.0, "outcome");
    add(&mut engine, &id, "Bonus", 50.0, "income");

    let (transactions, balance) = engine.transactions_with_balance(&id).unwrap();
    assert_eq!(transactions.len(), 3);
    assert_eq!(balance.total_income, 150.0);
    assert_eq!(balance.total_outcome, 30.0);
    assert_eq!(balance.net(), 120.0);
}

#[test]
fn invalid_type_does_not_append() {
    let (mut engine, id) = engine_with_user();
    let err = engine
        .new_transaction(&id, tx("Gift", 10.0, "donation"))
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidType(_)));
    assert!(engine.user(&id).unwrap().transactions.is_empty());
}

#[test]
fn transaction_for_unknown_user_mutates_nothing() {
    let (mut engine, id) = engine_with_user();
    let err = engine
        .new_transaction(&Uuid::new_v4().to_string(), tx("Salary", 10.0, "income"))
        .unwrap_err();
    assert!(matches!(err, EngineError::UserNotFound(_)));
    assert!(engine.user(&id).unwrap().transactions.is_empty());
}

#[test]
fn created_transaction_round_trips() {
    let (mut engine, id) = engine_with_user();
    let tx_id = add(&mut engine, &id, "Salary", 1234.5, "income");

    let tx = engine.transaction(&id, &tx_id).unwrap();
    assert_eq!(tx.title, "Salary");
    assert_eq!(tx.value, 1234.5);
    assert_eq!(tx.kind, TransactionKind::Income);
}

#[test]
fn lookup_reports_user_before_transaction() {
    let (mut engine, id) = engine_with_user();
    let tx_id = add(&mut engine, &id, "Salary", 1.0, "income");

    assert!(matches!(
        engine.transaction(&Uuid::new_v4().to_string(), &tx_id),
        Err(EngineError::UserNotFound(_))
    ));
    assert!(matches!(
        engine.transaction(&id, &Uuid::new_v4().to_string()),
        Err(EngineError::TransactionNotFound(_))
    ));
}

#[test]
fn update_transaction_overwrites_supplied_fields() {
    let (mut engine, id) = engine_with_user();
    let tx_id = add(&mut engine, &id, "Salary", 100.0, "income");

    let tx = engine
        .update_transaction(
            &id,
            &tx_id,
            TransactionFields {
                title: Some("Refund".to_string()),
                value: None,
                kind: Some("outcome".to_string()),
            },
        )
        .unwrap();
    assert_eq!(tx.title, "Refund");
    assert_eq!(tx.value, 100.0);
    assert_eq!(tx.kind, TransactionKind::Outcome);
}

#[test]
fn delete_transaction_removes_it_from_owner() {
    let (mut engine, id) = engine_with_user();
    let first = add(&mut engine, &id, "Salary", 100.0, "income");
    let second = add(&mut engine, &id, "Rent", 40.0, "outcome");

    let removed = engine.delete_transaction(&id, &first).unwrap();
    assert_eq!(removed.title, "Salary");

    let user = engine.user(&id).unwrap();
    assert_eq!(user.transactions.len(), 1);
    assert_eq!(user.transactions[0].id.to_string(), second);
    assert!(matches!(
        engine.delete_transaction(&id, &first),
        Err(EngineError::TransactionNotFound(_))
    ));
}
