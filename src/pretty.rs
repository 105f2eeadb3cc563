/// Pretty-printer: renders an accepted loop back to canonical source.

use crate::ast::*;

pub fn pretty_program(prog: &Program) -> String {
    format!(
        "{}({}; {}; {}) {{\n{}\n}}",
        prog.keyword,
        pretty_init(&prog.init),
        pretty_condition(&prog.condition),
        pretty_increment(&prog.increment),
        pretty_statement(&prog.body),
    )
}

fn pretty_init(init: &Init) -> String {
    format!("{} = {}", init.name, init.value)
}

fn pretty_condition(cond: &Condition) -> String {
    format!("{} <= {}", cond.name, cond.bound)
}

fn pretty_increment(inc: &Increment) -> String {
    format!("{}++", inc.name)
}

fn pretty_statement(stmt: &Statement) -> String {
    format!("{}({});", stmt.print, pretty_expr(&stmt.argument))
}

fn pretty_expr(expr: &Expression) -> String {
    match expr {
        Expression::Ident(name) => name.clone(),
    }
}
