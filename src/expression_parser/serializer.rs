//! Renders an expression tree back to canonical source text. Operators get
//! single spaces, strings come out single-quoted, and explicit grouping
//! nodes keep their parentheses.

use super::ast::{Expr, MemberKey, ObjectKey};

pub fn serialize(expr: &Expr) -> String {
    match expr {
        Expr::Ident(name) => name.clone(),
        Expr::Number(value) => number(*value),
        Expr::Str(value) => format!("'{value}'"),
        Expr::Unary { op, expr } => format!("{op}{}", serialize(expr)),
        Expr::Binary { op, left, right } => {
            format!("{} {op} {}", serialize(left), serialize(right))
        }
        Expr::Conditional {
            test,
            consequent,
            alternate,
        } => format!(
            "{} ? {} : {}",
            serialize(test),
            serialize(consequent),
            serialize(alternate)
        ),
        Expr::Member { object, property } => match property {
            MemberKey::Dot(name) => format!("{}.{name}", serialize(object)),
            MemberKey::Computed(key) => format!("{}[{}]", serialize(object), serialize(key)),
        },
        Expr::Call { callee, args } => {
            let args: Vec<String> = args.iter().map(serialize).collect();
            format!("{}({})", serialize(callee), args.join(", "))
        }
        Expr::Object { entries } => {
            let entries: Vec<String> = entries
                .iter()
                .map(|(key, value)| format!("{}: {}", object_key(key), serialize(value)))
                .collect();
            format!("{{{}}}", entries.join(", "))
        }
        Expr::Array(elements) => {
            let elements: Vec<String> = elements.iter().map(serialize).collect();
            format!("[{}]", elements.join(", "))
        }
        Expr::Paren(inner) => format!("({})", serialize(inner)),
    }
}

fn object_key(key: &ObjectKey) -> String {
    match key {
        ObjectKey::Ident(name) => name.clone(),
        ObjectKey::Str(value) => format!("'{value}'"),
        ObjectKey::Number(value) => number(*value),
    }
}

fn number(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
