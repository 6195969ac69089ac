use sqlfrag::prelude::*;
use sqlfrag::{PlaceholderStyle, TableRef};

fn col(name: &str) -> Fragment {
    Fragment::ident(name).unwrap()
}

struct UserFilter {
    status: Option<&'static str>,
    min_age: Option<i64>,
    name_like: Option<&'static str>,
    ids: Vec<i64>,
}

fn search_users(filter: &UserFilter) -> SqlResult<Fragment> {
    let u = TableRef::new("users")?.alias("u")?.columns(["id", "name", "age"])?;
    let (id, name, age, status) = (
        u.column("id")?,
        u.column("name")?,
        u.column("age")?,
        u.column("status")?,
    );
    let condition = syntax::to_and_condition_opt([
        filter.status.map(|s| syntax::eq(&status, s)),
        filter.min_age.map(|a| syntax::ge(&age, a)),
        filter.name_like.map(|n| syntax::ilike(&name, n)),
        (!filter.ids.is_empty()).then(|| syntax::in_list(&id, filter.ids.iter().copied())),
    ]);
    Ok(syntax::select([u.result_all()])
        .from_table(u.from_clause())
        .where_opt(condition)
        .order_by([id])
        .limit(20))
}

#[test]
fn optional_filters_leave_no_dangling_keywords() {
    let none = UserFilter {
        status: None,
        min_age: None,
        name_like: None,
        ids: Vec::new(),
    };
    let stmt = search_users(&none).unwrap().to_statement().unwrap();
    assert_eq!(
        stmt.sql(),
        "select u.id, u.name, u.age from users u order by u.id limit $1"
    );
    assert_eq!(stmt.params(), &[Value::Int(20)]);
}

#[test]
fn present_filters_are_numbered_in_text_order() {
    let some = UserFilter {
        status: Some("active"),
        min_age: None,
        name_like: Some("%ann%"),
        ids: vec![3, 5],
    };
    let stmt = search_users(&some).unwrap().to_statement().unwrap();
    assert_eq!(
        stmt.sql(),
        "select u.id, u.name, u.age from users u where u.status = $1 and u.name ilike $2 \
         and u.id in ($3, $4) order by u.id limit $5"
    );
    assert_eq!(
        stmt.params(),
        &[
            Value::from("active"),
            Value::from("%ann%"),
            Value::Int(3),
            Value::Int(5),
            Value::Int(20),
        ]
    );
}

#[test]
fn nested_subqueries_keep_parameter_order() {
    let orders = template(
        "select o.user_id from orders o where o.total > ? and o.placed_at >= current_date - ?",
        [Arg::from(100), Arg::from(30)],
    )
    .unwrap();
    let q = syntax::select([col("id")])
        .from_table(col("users"))
        .where_clause(syntax::join_with_or([
            syntax::in_subquery(&col("id"), orders),
            syntax::eq(&col("vip"), true),
        ]))
        .limit_offset(10, 0);

    let stmt = q.to_statement().unwrap();
    assert_eq!(
        stmt.sql(),
        "select id from users where (id in (select o.user_id from orders o where o.total > $1 \
         and o.placed_at >= current_date - $2)) or vip = $3 limit $4 offset $5"
    );
    assert_eq!(
        stmt.params(),
        &[
            Value::Int(100),
            Value::Int(30),
            Value::Bool(true),
            Value::Int(10),
            Value::Int(0),
        ]
    );
}

#[test]
fn aggregate_report() {
    let dept = col("dept");
    let salary = col("salary");
    let q = syntax::select([dept.clone(), syntax::count_all(), syntax::avg(&salary)])
        .from_table(col("employees"))
        .where_clause(syntax::between(&col("hired_on"), "2020-01-01", "2020-12-31"))
        .group_by([dept.clone()])
        .having(syntax::gt(&syntax::count_all(), 3))
        .order_by([syntax::avg(&salary).desc()]);

    assert!(q.is_aligned());
    assert_eq!(
        q.to_statement().unwrap().sql(),
        "select dept, count(*), avg(salary) from employees where hired_on between $1 and $2 \
         group by dept having count(*) > $3 order by avg(salary) desc"
    );
}

#[test]
fn union_of_two_selects() {
    let active = syntax::select([col("id")])
        .from_table(col("users"))
        .where_clause(syntax::eq(&col("active"), true));
    let pending = syntax::select([col("user_id")])
        .from_table(col("invites"))
        .where_clause(syntax::is_not_null(&col("sent_at")));
    let stmt = active.union(pending).to_statement().unwrap();
    assert_eq!(
        stmt.sql(),
        "select id from users where active = $1 union select user_id from invites where sent_at is not null"
    );
}

#[test]
fn question_mark_style_leaves_markers() {
    let q = lit("select * from t")
        .unwrap()
        .where_clause(syntax::not_in(&col("id"), [1, 2]));
    let config = RenderConfig::new().with_style(PlaceholderStyle::QuestionMark);
    let stmt = q.render(&config).unwrap();
    assert_eq!(stmt.sql(), "select * from t where id not in (?, ?)");
}

#[test]
fn quoted_question_marks_are_not_placeholders() {
    let q = template("select '?' as q, \"wh?\" from t where id = ?", [1]).unwrap();
    let stmt = q.to_statement().unwrap();
    assert_eq!(stmt.sql(), "select '?' as q, \"wh?\" from t where id = $1");
}

#[test]
fn invalid_identifiers_are_rejected() {
    for bad in ["id; drop table users", "a b", "1col", "", "a..b", "x--"] {
        let err = Fragment::ident(bad).unwrap_err();
        assert!(err.is_invalid_ident(), "{bad:?} should be rejected");
    }
}
