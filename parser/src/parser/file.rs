use super::context::ParserContext;
use crate::tokenizer::TokenKind;
use minijava_ast::*;

impl ParserContext<'_> {
    /// `[packageDeclaration] importDeclaration* typeDeclaration*`.
    pub fn parse_compilation_unit(&mut self) -> CompilationUnit {
        let file = self.file_name().to_string();
        let line = self.current().line;

        let package = if self.see(TokenKind::Package) {
            self.advance();
            let name = self.parse_qualified_name();
            self.must_be(TokenKind::Semi);
            Some(name)
        } else {
            None
        };

        let mut imports = Vec::new();
        while self.see(TokenKind::Import) {
            self.advance();
            imports.push(self.parse_qualified_name());
            self.must_be(TokenKind::Semi);
        }

        let mut decls = Vec::new();
        while !self.is_eof() {
            decls.push(self.parse_type_declaration());
        }

        CompilationUnit { file, line, package, imports, decls }
    }

    fn parse_type_declaration(&mut self) -> TypeDecl {
        TypeDecl::Class(self.parse_class_declaration())
    }

    /// Accumulates modifiers, flagging a repeated modifier or more than one
    /// access modifier on the same declaration without aborting the parse:
    /// the offending modifier is reported but still recorded, in source
    /// order, alongside every modifier seen before it.
    fn parse_modifiers(&mut self) -> Vec<Modifier> {
        let mut modifiers: Vec<Modifier> = Vec::new();
        loop {
            let modifier = match self.current().kind {
                TokenKind::Public => Modifier::Public,
                TokenKind::Protected => Modifier::Protected,
                TokenKind::Private => Modifier::Private,
                TokenKind::Static => Modifier::Static,
                TokenKind::Abstract => Modifier::Abstract,
                _ => break,
            };
            let span = self.span();
            self.advance();
            if modifiers.contains(&modifier) {
                self.emit_err(span, format!("Repeated modifier: {}", modifier.name()));
            } else if modifier.is_access_modifier() && modifiers.iter().any(Modifier::is_access_modifier) {
                self.emit_err(span, "Access conflict in modifiers");
            }
            modifiers.push(modifier);
        }
        modifiers
    }

    /// `modifiers 'class' Identifier ['extends' referenceType] classBody`.
    fn parse_class_declaration(&mut self) -> ClassDecl {
        let span = self.span();
        let modifiers = self.parse_modifiers();
        self.must_be(TokenKind::Class);
        let name = self.must_be_identifier();
        let super_class = if self.see(TokenKind::Extends) {
            self.advance();
            Type::Named(self.parse_qualified_name())
        } else {
            Type::object()
        };
        let members = self.parse_class_body();
        ClassDecl { modifiers, name, super_class, members, span }
    }

    fn parse_class_body(&mut self) -> Vec<Member> {
        self.must_be(TokenKind::LCurly);
        let mut members = Vec::new();
        while !self.see(TokenKind::RCurly) && !self.is_eof() {
            members.push(self.parse_member_declaration());
        }
        self.must_be(TokenKind::RCurly);
        members
    }

    /// A member is a constructor if its declaration opens with
    /// `Identifier (` (no return type precedes it); otherwise it's a
    /// field or a method, told apart by whether `(` follows the member's
    /// name.
    fn parse_member_declaration(&mut self) -> Member {
        let span = self.span();
        let modifiers = self.parse_modifiers();

        if self.see_ident_lparen() {
            return Member::Constructor(self.parse_constructor_declaration(modifiers, span));
        }

        let declared_type = self.parse_result_type();
        let name = self.must_be_identifier();
        if self.see(TokenKind::LParen) {
            Member::Method(self.parse_method_declaration_tail(modifiers, declared_type, name, span))
        } else {
            Member::Field(self.parse_field_declaration_tail(modifiers, declared_type, name, span))
        }
    }

    fn parse_constructor_declaration(&mut self, modifiers: Vec<Modifier>, span: minijava_span::Span) -> ConstructorDecl {
        let name = self.must_be_identifier();
        let parameters = self.parse_formal_parameters();
        let body = self.parse_block();
        ConstructorDecl { modifiers, name, parameters, body, span }
    }

    fn parse_formal_parameters(&mut self) -> Vec<FormalParameter> {
        self.must_be(TokenKind::LParen);
        let mut parameters = Vec::new();
        if !self.see(TokenKind::RParen) {
            loop {
                let span = self.span();
                let parameter_type = self.parse_type();
                let name = self.must_be_identifier();
                parameters.push(FormalParameter { parameter_type, name, span });
                if self.have(TokenKind::Comma).is_none() {
                    break;
                }
            }
        }
        self.must_be(TokenKind::RParen);
        parameters
    }

    fn parse_method_declaration_tail(
        &mut self,
        modifiers: Vec<Modifier>,
        return_type: Type,
        name: Identifier,
        span: minijava_span::Span,
    ) -> MethodDecl {
        let parameters = self.parse_formal_parameters();
        let body = if self.have(TokenKind::Semi).is_some() { None } else { Some(self.parse_block()) };
        MethodDecl { modifiers, return_type, name, parameters, body, span }
    }

    /// Parses the declarator list following the member's first declared
    /// name, e.g. the `x, y[]` in `private int x, y[];`.
    fn parse_field_declaration_tail(
        &mut self,
        modifiers: Vec<Modifier>,
        declared_type: Type,
        first_name: Identifier,
        span: minijava_span::Span,
    ) -> FieldDecl {
        let mut declarators = Vec::new();
        let mut pending_name = Some(first_name);
        loop {
            let name = pending_name.take().unwrap_or_else(|| self.must_be_identifier());
            let decl_span = name.span;
            let extra_dims = self.parse_dims();
            let mut this_type = declared_type.clone();
            for _ in 0..extra_dims {
                this_type = Type::array(this_type);
            }
            let initializer = if self.have(TokenKind::Assign).is_some() {
                Some(if self.see(TokenKind::LCurly) {
                    self.parse_array_initializer(this_type.clone())
                } else {
                    self.parse_expression()
                })
            } else {
                None
            };
            declarators.push(VariableDeclarator { name, declared_type: this_type, initializer, span: decl_span });
            if self.have(TokenKind::Comma).is_none() {
                break;
            }
        }
        self.must_be(TokenKind::Semi);
        FieldDecl { modifiers, declared_type, declarators, span }
    }
}
