/// Syntax tree for an accepted for loop.
/// Names and keyword spellings keep the casing they had in the source.

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// Spelling of the `for` keyword as written.
    pub keyword: String,
    pub init: Init,
    pub condition: Condition,
    pub increment: Increment,
    pub body: Statement,
}

/// `name = value`
#[derive(Debug, Clone, PartialEq)]
pub struct Init {
    pub name: String,
    pub value: i64,
}

/// `name <= bound`
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub name: String,
    pub bound: i64,
}

/// `name++`
#[derive(Debug, Clone, PartialEq)]
pub struct Increment {
    pub name: String,
}

/// `System.out.println(expr);`
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    /// Spelling of the print call as written.
    pub print: String,
    pub argument: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Ident(String),
}
