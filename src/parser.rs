use crate::lexer::{Kind, Lexer, Term};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    // Terminals:
    Term(String),
    Alias(String),

    // Modifiers:
    Field(String, Box<Expression>),
    Forbidden(Box<Expression>),

    /// Terms that must all hold.
    Clause(Vec<Expression>),
}

struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl Parser<'_> {
    fn term(term: &Term) -> Option<Expression> {
        let text = term.text();
        if text.is_empty() {
            return None;
        }

        let mut expression = match term.value.kind {
            Kind::Alias => Expression::Alias(text.to_string()),
            _ => Expression::Term(text.to_string()),
        };

        if let Some(name) = term.field_name() {
            expression = Expression::Field(name.to_string(), Box::new(expression));
        }

        if term.is_negated() {
            expression = Expression::Forbidden(Box::new(expression));
        }

        Some(expression)
    }

    fn expression(&mut self) -> Expression {
        Expression::Clause(
            self.lexer
                .by_ref()
                .filter_map(|term| Self::term(&term))
                .collect(),
        )
    }
}

/// Builds a filter expression from the terms remaining in `lexer`.
///
/// Terms without a value (a lone `-`, `field:` while typing) are skipped.
pub fn parse(lexer: Lexer<'_>) -> Expression {
    let mut parser = Parser { lexer };
    parser.expression()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AliasSet;
    use pretty_assertions::assert_eq;

    fn expression(source: &str) -> Expression {
        let aliases: AliasSet = ["cut", "short"].into_iter().collect();
        parse(Lexer::new(source, &aliases))
    }

    fn term(value: &str) -> Expression {
        Expression::Term(String::from(value))
    }

    fn field(name: &str, body: Expression) -> Expression {
        Expression::Field(String::from(name), Box::new(body))
    }

    fn forbidden(body: Expression) -> Expression {
        Expression::Forbidden(Box::new(body))
    }

    #[test]
    fn empty() {
        assert_eq!(expression("  "), Expression::Clause(vec![]));
    }

    #[test]
    fn simple() {
        assert_eq!(
            expression("status:open -cut Short printer"),
            Expression::Clause(vec![
                field("status", term("open")),
                forbidden(term("cut")),
                Expression::Alias(String::from("Short")),
                term("printer"),
            ])
        );
    }

    #[test]
    fn negation() {
        assert_eq!(
            expression("-owner:bob owner:-alice -x:-y"),
            Expression::Clause(vec![
                forbidden(field("owner", term("bob"))),
                forbidden(field("owner", term("alice"))),
                forbidden(field("x", term("y"))),
            ])
        );
    }

    #[test]
    fn field_scoped_alias_is_a_term() {
        assert_eq!(
            expression("type:cut"),
            Expression::Clause(vec![field("type", term("cut"))])
        );
    }

    #[test]
    fn incomplete_terms() {
        assert_eq!(
            expression("- status: owner:- a-b:c"),
            Expression::Clause(vec![term("a-b:c")])
        );
    }

    #[test]
    fn remaining_terms() {
        let aliases = AliasSet::new();
        let mut lexer = Lexer::new("first second", &aliases);
        lexer.next();

        assert_eq!(parse(lexer), Expression::Clause(vec![term("second")]));
    }
}
