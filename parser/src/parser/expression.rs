use super::context::ParserContext;
use crate::tokenizer::TokenKind;
use minijava_ast::*;

/// Tokens that can legally begin a `simpleUnaryExpression` (i.e. a unary
/// expression with no leading `+`/`-`). Used to disambiguate a
/// parenthesized cast from a parenthesized ordinary expression: `(Foo) -x`
/// is only a cast if what follows the `)` can start an expression, and for
/// a reference-type cast specifically it must not start with a sign,
/// since `(a) - b` is read as subtraction when `a` could be a variable.
const SIMPLE_UNARY_START: &[TokenKind] = &[
    TokenKind::Identifier,
    TokenKind::IntLiteral,
    TokenKind::CharLiteral,
    TokenKind::StringLiteral,
    TokenKind::True,
    TokenKind::False,
    TokenKind::Null,
    TokenKind::This,
    TokenKind::Super,
    TokenKind::New,
    TokenKind::LParen,
    TokenKind::LNot,
    TokenKind::Inc,
];

impl ParserContext<'_> {
    pub fn parse_expression(&mut self) -> Expression {
        self.parse_assignment_expression()
    }

    /// `conditionalAnd [ ('=' | '+=') assignmentExpression ]`, right-associative
    /// and single-shot: the grammar never has to decide between two
    /// different assignment operators at the same position, so there is
    /// at most one to consume before recursing for the right-hand side.
    fn parse_assignment_expression(&mut self) -> Expression {
        let left = self.parse_conditional_and_expression();
        let op = if self.see(TokenKind::Assign) {
            self.advance();
            BinaryOperation::Assign
        } else if self.see(TokenKind::PlusAssign) {
            self.advance();
            BinaryOperation::PlusAssign
        } else {
            return left;
        };
        let right = self.parse_assignment_expression();
        let span = left.span();
        Expression::Binary(BinaryExpression { left: Box::new(left), right: Box::new(right), op, span, is_statement_expression: false })
    }

    fn parse_conditional_and_expression(&mut self) -> Expression {
        let mut left = self.parse_equality_expression();
        while self.see(TokenKind::LAnd) {
            self.advance();
            let right = self.parse_equality_expression();
            let span = left.span();
            left = Expression::Binary(BinaryExpression {
                left: Box::new(left),
                right: Box::new(right),
                op: BinaryOperation::LogicalAnd,
                span,
                is_statement_expression: false,
            });
        }
        left
    }

    fn parse_equality_expression(&mut self) -> Expression {
        let mut left = self.parse_relational_expression();
        while self.see(TokenKind::Equal) {
            self.advance();
            let right = self.parse_relational_expression();
            let span = left.span();
            left = Expression::Binary(BinaryExpression {
                left: Box::new(left),
                right: Box::new(right),
                op: BinaryOperation::Equal,
                span,
                is_statement_expression: false,
            });
        }
        left
    }

    /// `additive [ ('>' | '<=') additive | 'instanceof' referenceType ]`.
    /// Non-associative: at most one relational operator or `instanceof`
    /// check is consumed, with no looping back to this level for the
    /// right-hand side.
    fn parse_relational_expression(&mut self) -> Expression {
        let left = self.parse_additive_expression();
        let span = left.span();
        if self.see(TokenKind::Gt) {
            self.advance();
            let right = self.parse_additive_expression();
            Expression::Binary(BinaryExpression {
                left: Box::new(left),
                right: Box::new(right),
                op: BinaryOperation::GreaterThan,
                span,
                is_statement_expression: false,
            })
        } else if self.see(TokenKind::Le) {
            self.advance();
            let right = self.parse_additive_expression();
            Expression::Binary(BinaryExpression {
                left: Box::new(left),
                right: Box::new(right),
                op: BinaryOperation::LessEqual,
                span,
                is_statement_expression: false,
            })
        } else if self.see(TokenKind::InstanceOf) {
            self.advance();
            let checked_type = self.parse_type();
            Expression::InstanceOf(InstanceOfExpression { expression: Box::new(left), checked_type, span, is_statement_expression: false })
        } else {
            left
        }
    }

    fn parse_additive_expression(&mut self) -> Expression {
        let mut left = self.parse_multiplicative_expression();
        loop {
            let op = if self.see(TokenKind::Plus) {
                BinaryOperation::Add
            } else if self.see(TokenKind::Minus) {
                BinaryOperation::Subtract
            } else {
                break;
            };
            self.advance();
            let right = self.parse_multiplicative_expression();
            let span = left.span();
            left = Expression::Binary(BinaryExpression { left: Box::new(left), right: Box::new(right), op, span, is_statement_expression: false });
        }
        left
    }

    fn parse_multiplicative_expression(&mut self) -> Expression {
        let mut left = self.parse_unary_expression();
        loop {
            let op = if self.see(TokenKind::Star) {
                BinaryOperation::Multiply
            } else if self.see(TokenKind::Div) {
                BinaryOperation::Divide
            } else if self.see(TokenKind::Mod) {
                BinaryOperation::Modulo
            } else {
                break;
            };
            self.advance();
            let right = self.parse_unary_expression();
            let span = left.span();
            left = Expression::Binary(BinaryExpression { left: Box::new(left), right: Box::new(right), op, span, is_statement_expression: false });
        }
        left
    }

    /// `('+' | '-')* simpleUnaryExpression`. The run of prefix signs is
    /// collected first and applied innermost-first so `- - x` nests as
    /// `Negate(Negate(x))` rather than flattening the signs.
    fn parse_unary_expression(&mut self) -> Expression {
        let mut ops = Vec::new();
        loop {
            if self.see(TokenKind::Minus) {
                let span = self.span();
                self.advance();
                ops.push((UnaryOperation::Negate, span));
            } else if self.see(TokenKind::Plus) {
                let span = self.span();
                self.advance();
                ops.push((UnaryOperation::UnaryPlus, span));
            } else {
                break;
            }
        }
        let mut inner = self.parse_simple_unary_expression();
        for (op, span) in ops.into_iter().rev() {
            inner = Expression::Unary(UnaryExpression { receiver: Box::new(inner), op, span, is_statement_expression: false });
        }
        inner
    }

    /// `'!' unaryExpression | '++' unaryExpression | castExpression | postfixExpression`.
    fn parse_simple_unary_expression(&mut self) -> Expression {
        if self.see(TokenKind::LNot) {
            let span = self.span();
            self.advance();
            let inner = self.parse_unary_expression();
            return Expression::Unary(UnaryExpression {
                receiver: Box::new(inner),
                op: UnaryOperation::LogicalNot,
                span,
                is_statement_expression: false,
            });
        }
        if self.see(TokenKind::Inc) {
            let span = self.span();
            self.advance();
            let inner = self.parse_unary_expression();
            return Expression::IncDec(IncDecExpression {
                target: Box::new(inner),
                op: IncDecOperation::PreIncrement,
                span,
                is_statement_expression: false,
            });
        }
        if self.see_cast() {
            return self.parse_cast_expression();
        }
        self.parse_postfix_expression()
    }

    /// Speculatively checks whether the cursor is standing on `'(' type ')'`
    /// followed by something that can start the cast's operand, without
    /// consuming anything: the defining trick of resolving the
    /// cast-vs-parenthesized-expression ambiguity with one token of
    /// lookahead is to look arbitrarily far ahead and then rewind.
    fn see_cast(&mut self) -> bool {
        if !self.see(TokenKind::LParen) {
            return false;
        }
        self.record_position();
        self.advance();
        let is_basic = self.see_basic_type();
        let is_type = is_basic || self.see_reference_type();
        let result = is_type && {
            if is_basic {
                self.advance();
            } else {
                self.parse_qualified_name_silently();
            }
            self.skip_dims_silently();
            self.see(TokenKind::RParen) && {
                self.advance();
                if is_basic {
                    self.see_any(SIMPLE_UNARY_START) || self.see(TokenKind::Plus) || self.see(TokenKind::Minus)
                } else {
                    self.see_any(SIMPLE_UNARY_START)
                }
            }
        };
        self.return_to_position();
        result
    }

    fn parse_qualified_name_silently(&mut self) {
        self.advance();
        while self.see(TokenKind::Dot) && self.peek(1).kind == TokenKind::Identifier {
            self.advance();
            self.advance();
        }
    }

    fn skip_dims_silently(&mut self) {
        while self.see_dims() {
            self.advance();
            self.advance();
        }
    }

    fn parse_cast_expression(&mut self) -> Expression {
        let span = self.span();
        self.advance(); // '('
        let target_type = self.parse_type();
        self.must_be(TokenKind::RParen);
        let is_basic = matches!(target_type, Type::Basic(_));
        let expression =
            if is_basic { Box::new(self.parse_unary_expression()) } else { Box::new(self.parse_simple_unary_expression()) };
        Expression::Cast(CastOpExpression { target_type, expression, span, is_statement_expression: false })
    }

    /// Primary expression, then any number of `.name`, `.name(args)`, or
    /// `[index]` selectors, then an optional single trailing `--`: the
    /// postfix operators never loop after the decrement, since `x----` is
    /// not a legal chain in this grammar.
    fn parse_postfix_expression(&mut self) -> Expression {
        let mut expr = self.parse_primary_expression();
        loop {
            if self.see(TokenKind::Dot) {
                self.advance();
                let name = self.must_be_identifier();
                if self.see(TokenKind::LParen) {
                    let arguments = self.parse_argument_list();
                    let span = expr.span();
                    expr = Expression::Message(MessageExpression {
                        target: Some(Box::new(expr)),
                        ambiguous: Vec::new(),
                        name,
                        arguments,
                        span,
                        is_statement_expression: false,
                    });
                } else {
                    let span = expr.span();
                    expr = Expression::FieldSelection(FieldSelectionExpression {
                        target: Box::new(expr),
                        name,
                        span,
                        is_statement_expression: false,
                    });
                }
            } else if self.see(TokenKind::LBrack) && !self.see_dims() {
                self.advance();
                let index = self.parse_expression();
                self.must_be(TokenKind::RBrack);
                let span = expr.span();
                expr = Expression::Array(ArrayExpression {
                    target: Box::new(expr),
                    index: Box::new(index),
                    span,
                    is_statement_expression: false,
                });
            } else {
                break;
            }
        }
        if self.see(TokenKind::Dec) {
            let span = expr.span();
            self.advance();
            expr = Expression::IncDec(IncDecExpression {
                target: Box::new(expr),
                op: IncDecOperation::PostDecrement,
                span,
                is_statement_expression: false,
            });
        }
        expr
    }

    fn parse_argument_list(&mut self) -> Vec<Expression> {
        self.must_be(TokenKind::LParen);
        let mut args = Vec::new();
        if !self.see(TokenKind::RParen) {
            loop {
                args.push(self.parse_expression());
                if self.have(TokenKind::Comma).is_none() {
                    break;
                }
            }
        }
        self.must_be(TokenKind::RParen);
        args
    }

    fn parse_primary_expression(&mut self) -> Expression {
        let span = self.span();
        match self.current().kind {
            TokenKind::IntLiteral => {
                let tok = self.advance();
                Expression::Literal(LiteralExpression { value: LiteralValue::Int(tok.image), span, is_statement_expression: false })
            }
            TokenKind::CharLiteral => {
                let tok = self.advance();
                Expression::Literal(LiteralExpression { value: LiteralValue::Char(tok.image), span, is_statement_expression: false })
            }
            TokenKind::StringLiteral => {
                let tok = self.advance();
                Expression::Literal(LiteralExpression { value: LiteralValue::String(tok.image), span, is_statement_expression: false })
            }
            TokenKind::True => {
                self.advance();
                Expression::Literal(LiteralExpression { value: LiteralValue::True, span, is_statement_expression: false })
            }
            TokenKind::False => {
                self.advance();
                Expression::Literal(LiteralExpression { value: LiteralValue::False, span, is_statement_expression: false })
            }
            TokenKind::Null => {
                self.advance();
                Expression::Literal(LiteralExpression { value: LiteralValue::Null, span, is_statement_expression: false })
            }
            TokenKind::This => {
                self.advance();
                if self.see(TokenKind::LParen) {
                    let arguments = self.parse_argument_list();
                    Expression::ThisConstruction(ThisConstructionExpression { arguments, span, is_statement_expression: false })
                } else {
                    Expression::This(ThisExpression { span, is_statement_expression: false })
                }
            }
            TokenKind::Super => {
                self.advance();
                if self.see(TokenKind::LParen) {
                    let arguments = self.parse_argument_list();
                    Expression::SuperConstruction(SuperConstructionExpression { arguments, span, is_statement_expression: false })
                } else {
                    Expression::Super(SuperExpression { span, is_statement_expression: false })
                }
            }
            TokenKind::New => self.parse_creator_expression(),
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expression();
                self.must_be(TokenKind::RParen);
                inner
            }
            TokenKind::Identifier => self.parse_name_expression(),
            _ => {
                self.emit_err(span, format!("Literal sought where {} found", self.current().display_image()));
                self.advance();
                Expression::Wild(WildExpression { span, is_statement_expression: false })
            }
        }
    }

    /// The leading identifier of a primary expression is ambiguous until
    /// either `(` commits it to a bare call or a non-`.` token commits it
    /// to a variable/field-access chain: a class or package qualifier
    /// cannot be told apart from a chain of field accesses without
    /// resolving names, which this parser does not do.
    fn parse_name_expression(&mut self) -> Expression {
        let span = self.span();
        let first = self.must_be_identifier();
        if self.see(TokenKind::LParen) {
            let arguments = self.parse_argument_list();
            return Expression::Message(MessageExpression {
                target: None,
                ambiguous: Vec::new(),
                name: first,
                arguments,
                span,
                is_statement_expression: false,
            });
        }

        let mut parts = vec![first];
        while self.see(TokenKind::Dot) && self.peek(1).kind == TokenKind::Identifier {
            self.record_position();
            self.advance();
            let next = self.must_be_identifier();
            if self.see(TokenKind::LParen) {
                let arguments = self.parse_argument_list();
                self.drop_bookmark();
                return Expression::Message(MessageExpression {
                    target: None,
                    ambiguous: parts,
                    name: next,
                    arguments,
                    span,
                    is_statement_expression: false,
                });
            }
            self.drop_bookmark();
            parts.push(next);
        }

        let mut expr =
            Expression::Variable(VariableExpression { name: parts[0], span: parts[0].span, is_statement_expression: false });
        for part in parts.into_iter().skip(1) {
            expr = Expression::FieldSelection(FieldSelectionExpression {
                target: Box::new(expr),
                name: part,
                span,
                is_statement_expression: false,
            });
        }
        expr
    }

    fn parse_creator_expression(&mut self) -> Expression {
        let span = self.span();
        self.advance(); // 'new'

        let base = if self.see_basic_type() {
            Type::Basic(self.parse_basic_type())
        } else if self.see_reference_type() {
            Type::Named(self.parse_qualified_name())
        } else {
            self.emit_err(span, format!("expected a type after 'new' but found {}", self.current().display_image()));
            return Expression::Wild(WildExpression { span, is_statement_expression: false });
        };

        if self.see(TokenKind::LBrack) {
            let mut array_type = base;
            let mut dims = Vec::new();
            while self.see(TokenKind::LBrack) && !self.see_dims() {
                self.advance();
                dims.push(self.parse_expression());
                self.must_be(TokenKind::RBrack);
                array_type = Type::array(array_type);
            }
            while self.see_dims() {
                self.advance();
                self.advance();
                array_type = Type::array(array_type);
            }
            if dims.is_empty() && self.see(TokenKind::LCurly) {
                return self.parse_array_initializer(array_type);
            }
            Expression::NewArray(NewArrayOpExpression { array_type, dims, span, is_statement_expression: false })
        } else if self.see(TokenKind::LParen) {
            let arguments = self.parse_argument_list();
            Expression::New(NewOpExpression { object_type: base, arguments, span, is_statement_expression: false })
        } else {
            self.emit_err(span, format!("( or [ sought where {} found", self.current().display_image()));
            Expression::Wild(WildExpression { span, is_statement_expression: false })
        }
    }

    /// `'{' [ (expression | arrayInitializer) (',' (expression | arrayInitializer))* ','? ] '}'`.
    pub(super) fn parse_array_initializer(&mut self, array_type: Type) -> Expression {
        let span = self.span();
        self.must_be(TokenKind::LCurly);
        let mut elements = Vec::new();
        if !self.see(TokenKind::RCurly) {
            loop {
                let element = if self.see(TokenKind::LCurly) {
                    match self.parse_array_initializer(array_type.component_type().clone()) {
                        Expression::ArrayInitializer(nested) => ArrayInitializerElement::Nested(nested),
                        other => ArrayInitializerElement::Expression(other),
                    }
                } else {
                    ArrayInitializerElement::Expression(self.parse_expression())
                };
                elements.push(element);
                if self.have(TokenKind::Comma).is_none() {
                    break;
                }
                if self.see(TokenKind::RCurly) {
                    break;
                }
            }
        }
        self.must_be(TokenKind::RCurly);
        Expression::ArrayInitializer(ArrayInitializerExpression { array_type, elements, span, is_statement_expression: false })
    }
}
