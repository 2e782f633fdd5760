use super::context::ParserContext;
use crate::tokenizer::TokenKind;
use minijava_ast::*;

impl ParserContext<'_> {
    pub fn parse_statement(&mut self) -> Statement {
        match self.current().kind {
            TokenKind::LCurly => Statement::Block(self.parse_block()),
            TokenKind::If => Statement::If(self.parse_if_statement()),
            TokenKind::While => Statement::While(self.parse_while_statement()),
            TokenKind::Return => Statement::Return(self.parse_return_statement()),
            TokenKind::Semi => {
                let span = self.span();
                self.advance();
                Statement::Empty(EmptyStatement { span })
            }
            _ if self.see_local_variable_declaration() => self.parse_local_variable_declaration_statement(),
            _ => self.parse_statement_expression(),
        }
    }

    pub fn parse_block(&mut self) -> Block {
        let span = self.span();
        self.must_be(TokenKind::LCurly);
        let mut statements = Vec::new();
        while !self.see(TokenKind::RCurly) && !self.is_eof() {
            statements.push(self.parse_statement());
        }
        self.must_be(TokenKind::RCurly);
        Block { statements, span }
    }

    fn parse_if_statement(&mut self) -> IfStatement {
        let span = self.span();
        self.advance(); // 'if'
        self.must_be(TokenKind::LParen);
        let condition = self.parse_expression();
        self.must_be(TokenKind::RParen);
        let then = Box::new(self.parse_statement());
        let otherwise = if self.see(TokenKind::Else) {
            self.advance();
            Some(Box::new(self.parse_statement()))
        } else {
            None
        };
        IfStatement { condition, then, otherwise, span }
    }

    fn parse_while_statement(&mut self) -> WhileStatement {
        let span = self.span();
        self.advance(); // 'while'
        self.must_be(TokenKind::LParen);
        let condition = self.parse_expression();
        self.must_be(TokenKind::RParen);
        let body = Box::new(self.parse_statement());
        WhileStatement { condition, body, span }
    }

    fn parse_return_statement(&mut self) -> ReturnStatement {
        let span = self.span();
        self.advance(); // 'return'
        let expression = if self.see(TokenKind::Semi) { None } else { Some(self.parse_expression()) };
        self.must_be(TokenKind::Semi);
        ReturnStatement { expression, span }
    }

    /// An expression statement is only legal when the expression has a
    /// side-effect (assignment, increment/decrement, a call, object
    /// creation); anything else is reported once and still kept in the
    /// tree so the rest of the file can be checked.
    fn parse_statement_expression(&mut self) -> Statement {
        let span = self.span();
        let mut expression = self.parse_expression();
        if expression.is_valid_statement_expression() {
            expression.mark_as_statement_expression();
        } else {
            self.emit_err(span, "Invalid statement expression; it does not have a side-effect");
        }
        self.must_be(TokenKind::Semi);
        Statement::Expression(StatementExpression { expression, span })
    }

    fn parse_local_variable_declaration_statement(&mut self) -> Statement {
        let span = self.span();
        let base_type = self.parse_type();
        let mut declarators = Vec::new();
        loop {
            let decl_span = self.span();
            let name = self.must_be_identifier();
            let extra_dims = self.parse_dims();
            let mut declared_type = base_type.clone();
            for _ in 0..extra_dims {
                declared_type = Type::array(declared_type);
            }
            let initializer = if self.have(TokenKind::Assign).is_some() {
                Some(if self.see(TokenKind::LCurly) {
                    self.parse_array_initializer(declared_type.clone())
                } else {
                    self.parse_expression()
                })
            } else {
                None
            };
            declarators.push(VariableDeclarator { name, declared_type, initializer, span: decl_span });
            if self.have(TokenKind::Comma).is_none() {
                break;
            }
        }
        self.must_be(TokenKind::Semi);
        Statement::VariableDeclaration(VariableDeclarationStatement { declarators, span })
    }
}
