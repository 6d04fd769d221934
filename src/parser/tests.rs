use super::{classify, columns, grouping, joins, ordering, predicate, table, values};
use crate::ast::{AggregateFunc, CompareOp, JoinCondition, JoinKind, OperationKind, SortOrder};
use crate::error::TranslateError;

// ===== Classification =====

#[test]
fn test_classify_basic_operations() {
    assert_eq!(
        classify("Show all records from customers").unwrap().operation,
        OperationKind::Select
    );
    assert_eq!(
        classify("create a table for users").unwrap().operation,
        OperationKind::Create
    );
    assert_eq!(
        classify("put milk in basket").unwrap().operation,
        OperationKind::Insert
    );
    assert_eq!(
        classify("modify the users table").unwrap().operation,
        OperationKind::Update
    );
    assert_eq!(
        classify("remove old logs").unwrap().operation,
        OperationKind::Delete
    );
}

#[test]
fn test_classify_normalizes_text() {
    let request = classify("  DELETE FROM Customers  ").unwrap();
    assert_eq!(request.operation, OperationKind::Delete);
    assert_eq!(request.text, "delete from customers");
}

#[test]
fn test_classify_tie_break_order() {
    // select is declared before delete, so "show" wins over "remove"
    assert_eq!(
        classify("show and remove old entries from logs")
            .unwrap()
            .operation,
        OperationKind::Select
    );
    // create is declared before select, so "make" wins over "list"
    assert_eq!(
        classify("make a list of customers").unwrap().operation,
        OperationKind::Create
    );
}

#[test]
fn test_classify_matches_substrings() {
    // "newest" contains the create trigger "new"
    assert_eq!(
        classify("show newest records from logs").unwrap().operation,
        OperationKind::Create
    );
}

#[test]
fn test_classify_clause_only_kinds() {
    assert_eq!(
        classify("join orders with customers").unwrap().operation,
        OperationKind::Join
    );
    assert_eq!(
        classify("summarize totals by region").unwrap().operation,
        OperationKind::Group
    );
    assert_eq!(
        classify("arrange by size").unwrap().operation,
        OperationKind::Order
    );
}

#[test]
fn test_classify_unrecognized_operation() {
    assert_eq!(
        classify("hello world"),
        Err(TranslateError::UnrecognizedOperation)
    );
    assert_eq!(classify(""), Err(TranslateError::UnrecognizedOperation));
}

// ===== Table names =====

#[test]
fn test_create_table_names() {
    assert_eq!(
        table::create_target("create a table for customers with name, email").unwrap(),
        "customers"
    );
    assert_eq!(
        table::create_target("make a table named inventory").unwrap(),
        "inventory"
    );
    assert_eq!(table::create_target("create table users").unwrap(), "users");
    assert_eq!(
        table::create_target("create something"),
        Err(TranslateError::TableNotFound)
    );
}

#[test]
fn test_query_table_names() {
    assert_eq!(
        table::query_target("show all records from customers").unwrap(),
        "customers"
    );
    assert_eq!(
        table::query_target("delete the orders table").unwrap(),
        "orders"
    );
    assert_eq!(
        table::query_target("show me everything"),
        Err(TranslateError::TableNotFound)
    );
}

#[test]
fn test_update_table_names() {
    assert_eq!(
        table::update_target("update the orders table set status to shipped").unwrap(),
        "orders"
    );
    assert_eq!(
        table::update_target("table customers set status to active").unwrap(),
        "customers"
    );
    // no "table" literal, so the word after the trigger is the table
    assert_eq!(
        table::update_target("update customers set status to active where id = 1").unwrap(),
        "customers"
    );
    assert_eq!(
        table::update_target("modify"),
        Err(TranslateError::TableNotFound)
    );
}

#[test]
fn test_insert_table_names() {
    assert_eq!(
        table::insert_target("add a record to customers").unwrap(),
        "customers"
    );
    assert_eq!(
        table::insert_target("insert into orders values 1, 2").unwrap(),
        "orders"
    );
    // no into/to phrase, so the first word stands in
    assert_eq!(table::insert_target("add something useful").unwrap(), "add");
}

// ===== Columns =====

#[test]
fn test_connector_column_run() {
    let cols = columns::extract("create a table for customers with name, email, phone").unwrap();
    let rendered: Vec<String> = cols.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec!["name VARCHAR(255)", "email VARCHAR(255)", "phone VARCHAR(20)"]
    );
}

#[test]
fn test_column_type_inference() {
    let cols =
        columns::extract("create a table for people with name, birth date, phone number").unwrap();
    assert_eq!(cols[1].name, "birth date");
    assert_eq!(cols[1].sql_type, "DATE");
    // "number" sits earlier in the type table than "phone"
    assert_eq!(cols[2].sql_type, "INT");
}

#[test]
fn test_column_stop_words_dropped() {
    let cols = columns::extract("create table accounts with with, table, and, owner").unwrap();
    assert_eq!(cols.len(), 1);
    assert_eq!(cols[0].name, "owner");
}

#[test]
fn test_column_fallback_comma_run() {
    let cols = columns::extract("create table products name, price, quantity").unwrap();
    let names: Vec<&str> = cols.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["name", "price", "quantity"]);
}

#[test]
fn test_no_columns_found() {
    assert_eq!(
        columns::extract("create a table named empty"),
        Err(TranslateError::NoColumnsFound)
    );
}

// ===== Joins =====

#[test]
fn test_join_mentioned() {
    assert!(joins::mentioned("combine the data"));
    assert!(joins::mentioned("merge results together"));
    assert!(!joins::mentioned("show everything from logs"));
}

#[test]
fn test_join_with_using_condition() {
    let join = joins::extract("join orders with customers using customer_id").unwrap();
    assert_eq!(join.kind, JoinKind::Inner);
    assert_eq!(join.left_table, "orders");
    assert_eq!(join.right_table, "customers");
    assert_eq!(join.condition, JoinCondition::Using("customer_id".into()));
}

#[test]
fn test_join_with_on_condition() {
    let join = joins::extract("join orders and customers on orders.customer_id = customers.id")
        .unwrap();
    assert_eq!(
        join.condition,
        JoinCondition::On {
            left_table: "orders".into(),
            left_column: "customer_id".into(),
            right_table: "customers".into(),
            right_column: "id".into(),
        }
    );
}

#[test]
fn test_join_fallback_condition() {
    let join = joins::extract("join events with sessions").unwrap();
    assert_eq!(join.condition, JoinCondition::Fallback);
}

#[test]
fn test_join_flavor_keyword() {
    let join = joins::extract("left join orders with customers using customer_id").unwrap();
    assert_eq!(join.kind, JoinKind::Left);

    let join = joins::extract("right join orders and customers using customer_id").unwrap();
    assert_eq!(join.kind, JoinKind::Right);

    let join = joins::extract("outer join events and sessions").unwrap();
    assert_eq!(join.kind, JoinKind::Outer);
    assert_eq!(join.condition, JoinCondition::Fallback);
}

#[test]
fn test_join_tables_missing() {
    assert_eq!(
        joins::extract("combine everything"),
        Err(TranslateError::JoinTablesNotFound)
    );
}

// ===== Grouping =====

#[test]
fn test_group_by_columns() {
    let group = grouping::extract("show sales from orders group by region, category");
    assert_eq!(group.columns, vec!["region", "category"]);
    assert!(group.aggregates.is_empty());
}

#[test]
fn test_aggregates_follow_table_order() {
    // sum appears first in the text but count is first in the vocabulary
    let group = grouping::extract("show sum of totals and count of orders from orders");
    assert_eq!(group.aggregates.len(), 2);
    assert_eq!(group.aggregates[0].func, AggregateFunc::Count);
    assert_eq!(group.aggregates[0].column, "orders");
    assert_eq!(group.aggregates[1].func, AggregateFunc::Sum);
    assert_eq!(group.aggregates[1].column, "totals");
}

#[test]
fn test_aggregate_connector_words() {
    let group = grouping::extract("show average for price from products");
    assert_eq!(group.aggregates[0].func, AggregateFunc::Avg);
    assert_eq!(group.aggregates[0].column, "price");

    let group = grouping::extract("show maximum on score from games");
    assert_eq!(group.aggregates[0].func, AggregateFunc::Max);
}

#[test]
fn test_no_grouping() {
    assert!(grouping::extract("show everything from logs").is_empty());
}

// ===== Ordering =====

#[test]
fn test_order_by_single_column() {
    let keys = ordering::extract("show products from products order by price");
    assert_eq!(keys.len(), 1);
    assert_eq!(keys[0].column, "price");
    assert_eq!(keys[0].direction, SortOrder::Asc);
}

#[test]
fn test_desc_applies_to_every_column() {
    let keys = ordering::extract("sort items from items order by name, price descending");
    assert_eq!(keys.len(), 2);
    assert!(keys.iter().all(|k| k.direction == SortOrder::Desc));

    let keys = ordering::extract("show products from products order by price desc");
    assert_eq!(keys[0].direction, SortOrder::Desc);
}

#[test]
fn test_no_order_clause() {
    // "sort" alone classifies, but extraction needs the "order by" literal
    assert!(ordering::extract("sort the results please").is_empty());
}

// ===== Predicates =====

#[test]
fn test_predicate_operators() {
    let pred = predicate::extract("show users from users where price > 100").unwrap();
    assert_eq!(pred.column, "price");
    assert_eq!(pred.op, CompareOp::Gt);
    assert_eq!(pred.value, "100");

    let pred = predicate::extract("delete from users where status = inactive").unwrap();
    assert_eq!(pred.op, CompareOp::Eq);

    let pred = predicate::extract("show from items where price < 5").unwrap();
    assert_eq!(pred.op, CompareOp::Lt);

    let pred = predicate::extract("show from users where name like john").unwrap();
    assert_eq!(pred.op, CompareOp::Like);
}

#[test]
fn test_predicate_requires_where_literal() {
    assert_eq!(predicate::extract("show users with price > 100"), None);
}

#[test]
fn test_malformed_predicate_dropped() {
    assert_eq!(
        predicate::extract("show users from users where something weird"),
        None
    );
}

// ===== Insert lists and assignments =====

#[test]
fn test_insert_lists() {
    let lists =
        values::insert_lists("add a record to customers with columns name, email values john, jdoe")
            .unwrap();
    assert_eq!(lists.columns, vec!["name", "email"]);
    assert_eq!(lists.values, vec!["john", "jdoe"]);
}

#[test]
fn test_insert_lists_arity_preserved() {
    let lists = values::insert_lists("put data into logs with columns a, b values 1, 2, 3").unwrap();
    assert_eq!(lists.columns.len(), 2);
    assert_eq!(lists.values.len(), 3);
}

#[test]
fn test_insert_values_stop_at_period() {
    let lists =
        values::insert_lists("insert into users columns name, email values john, john@email.com")
            .unwrap();
    assert_eq!(lists.values, vec!["john", "john@email"]);
}

#[test]
fn test_insert_lists_need_both_phrases() {
    assert_eq!(values::insert_lists("add to users with columns name, email"), None);
    assert_eq!(values::insert_lists("add to users values 1, 2"), None);
}

#[test]
fn test_set_pairs_in_order() {
    let pairs = values::set_pairs("update users set status to active set tier to gold");
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].column, "status");
    assert_eq!(pairs[0].value, "active");
    assert_eq!(pairs[1].column, "tier");
    assert_eq!(pairs[1].value, "gold");
}

#[test]
fn test_no_set_pairs() {
    assert!(values::set_pairs("update users").is_empty());
}
