use super::*;
use crate::config::RenderConfig;
use crate::template::{Arg, lit, template};

fn frag(sql: &'static str, values: Vec<i64>) -> Fragment {
    template(sql, values).unwrap()
}

#[test]
fn empty_is_left_and_right_identity() {
    let f = frag("a = ? and b = ?", vec![1, 2]);
    assert_eq!(Fragment::empty().append(f.clone()), f);
    assert_eq!(f.clone().append(Fragment::empty()), f);
    assert_eq!(Fragment::empty().append(Fragment::empty()), Fragment::empty());
}

#[test]
fn append_joins_with_single_space_and_keeps_param_order() {
    let a = frag("a = ?", vec![1]);
    let b = frag("b = ? or c = ?", vec![2, 3]);
    let ab = a.append(b);
    assert_eq!(ab.text(), "a = ? b = ? or c = ?");
    assert_eq!(ab.parameters(), &[Value::Int(1), Value::Int(2), Value::Int(3)]);
}

#[test]
fn append_is_associative() {
    let a = frag("a = ?", vec![1]);
    let b = frag("b = ?", vec![2]);
    let c = frag("c = ?", vec![3]);
    let left = a.clone().append(b.clone()).append(c.clone());
    let right = a.append(b.append(c));
    assert_eq!(left, right);
}

#[test]
fn equality_is_structural() {
    let a = frag("x = ?", vec![1]);
    let b = frag("x = ?", vec![1]);
    assert_eq!(a, b);
    assert_ne!(a, frag("x = ?", vec![2]));
    assert_ne!(a, frag("y = ?", vec![1]));
}

#[test]
fn display_renders_text() {
    let f = frag("x = ?", vec![1]);
    assert_eq!(f.to_string(), "x = ?");
}

#[test]
fn ident_builds_column_fragment() {
    let f = Fragment::ident("u.id").unwrap();
    assert_eq!(f.text(), "u.id");
    assert!(f.parameters().is_empty());
    assert!(Fragment::ident("u id").is_err());
}

#[test]
fn into_parts_returns_text_and_params() {
    let (text, params) = frag("x = ?", vec![9]).into_parts();
    assert_eq!(text, "x = ?");
    assert_eq!(params, vec![Value::Int(9)]);
}

#[test]
fn is_aligned_reports_mismatch() {
    assert!(frag("a = ? and b = ?", vec![1, 2]).is_aligned());
    let broken = Fragment::new_unchecked("a = ?", Vec::new());
    assert!(!broken.is_aligned());
}

#[test]
fn render_postgres_numbers_markers() {
    let f = frag("a = ?", vec![1]).append(frag("and b in (?, ?)", vec![2, 3]));
    let stmt = f.to_statement().unwrap();
    assert_eq!(stmt.sql(), "a = $1 and b in ($2, $3)");
    assert_eq!(stmt.params().len(), 3);
    assert_eq!(stmt.params_ref().len(), 3);
}

#[test]
fn render_question_mark_keeps_text() {
    let f = frag("a = ?", vec![1]);
    let stmt = f.render(&RenderConfig::question_mark()).unwrap();
    assert_eq!(stmt.sql(), "a = ?");
    assert_eq!(stmt.into_parts().1, vec![Value::Int(1)]);
}

#[test]
fn render_rejects_misaligned_fragment() {
    let broken = Fragment::new_unchecked("a = ? and b = ?", vec![Value::Int(1)]);
    let err = broken.to_statement().unwrap_err();
    assert!(err.is_validation());
    assert!(err.to_string().contains("placeholders(2) != params(1)"));
}

#[test]
fn render_without_validation_passes_through() {
    let broken = Fragment::new_unchecked("a = ?", Vec::new());
    let stmt = broken
        .render(&RenderConfig::postgres().without_validation())
        .unwrap();
    assert_eq!(stmt.sql(), "a = $1");
}

#[test]
fn nested_fragment_params_follow_text_position() {
    let inner = frag("y = ?", vec![2]);
    let outer = template("x = ? and (?) and z = ?", [
        Arg::from(1),
        Arg::from(inner),
        Arg::from(3),
    ])
    .unwrap();
    let stmt = outer.to_statement().unwrap();
    assert_eq!(stmt.sql(), "x = $1 and (y = $2) and z = $3");
    assert_eq!(
        stmt.params(),
        &[Value::Int(1), Value::Int(2), Value::Int(3)]
    );
}

#[test]
fn serializes_text_and_parameters() {
    let f = frag("x = ?", vec![1]);
    let json = serde_json::to_value(&f).unwrap();
    assert_eq!(json["text"], "x = ?");
    assert_eq!(json["parameters"][0]["value"], 1);
}

#[test]
fn lit_without_markers_is_aligned() {
    let f = lit("select 1").unwrap();
    assert!(f.is_aligned());
    assert_eq!(f.text(), "select 1");
}
