use super::context::ParserContext;
use crate::tokenizer::TokenKind;
use minijava_ast::{BasicType, Type};

const BASIC_TYPE_TOKENS: &[TokenKind] =
    &[TokenKind::Boolean, TokenKind::Char, TokenKind::Int, TokenKind::Void];

impl ParserContext<'_> {
    pub fn see_basic_type(&self) -> bool {
        self.see_any(BASIC_TYPE_TOKENS)
    }

    /// A reference type is a qualified name, or a basic type with at least
    /// one `[]` suffix: arrays of primitives are reference types too, which
    /// matters wherever a `referenceType` is required on its own, e.g. after
    /// `instanceof`.
    pub fn see_reference_type(&self) -> bool {
        self.see(TokenKind::Identifier)
            || (self.see_basic_type() && self.peek(1).kind == TokenKind::LBrack && self.peek(2).kind == TokenKind::RBrack)
    }

    /// `true` if the cursor is standing on a `[` immediately followed by `]`,
    /// i.e. one array-dimension suffix.
    pub fn see_dims(&self) -> bool {
        self.see(TokenKind::LBrack) && self.peek(1).kind == TokenKind::RBrack
    }

    pub(super) fn parse_basic_type(&mut self) -> BasicType {
        let tok = self.expect_any(BASIC_TYPE_TOKENS);
        match tok.kind {
            TokenKind::Boolean => BasicType::Boolean,
            TokenKind::Char => BasicType::Char,
            TokenKind::Int => BasicType::Int,
            TokenKind::Void => BasicType::Void,
            _ => BasicType::Any,
        }
    }

    /// Consumes every `[]` suffix pair the cursor is standing on, returning
    /// how many there were.
    pub(super) fn parse_dims(&mut self) -> u32 {
        let mut count = 0;
        while self.see_dims() {
            self.advance();
            self.advance();
            count += 1;
        }
        count
    }

    fn wrap_dims(mut ty: Type, dims: u32) -> Type {
        for _ in 0..dims {
            ty = Type::array(ty);
        }
        ty
    }

    /// `basicType dims? | referenceType dims?`. Used everywhere a `void`
    /// return type is not legal (local variable/field/parameter types).
    pub fn parse_type(&mut self) -> Type {
        let base = if self.see_basic_type() {
            Type::Basic(self.parse_basic_type())
        } else if self.see_reference_type() {
            Type::Named(self.parse_qualified_name())
        } else {
            self.emit_err(
                minijava_span::Span::new(self.current().line),
                format!("Type sought where {} found", self.current().display_image()),
            );
            Type::any()
        };
        let dims = self.parse_dims();
        Self::wrap_dims(base, dims)
    }

    /// A method's return type: `void`, or any ordinary type.
    pub fn parse_result_type(&mut self) -> Type {
        if self.see(TokenKind::Void) {
            self.advance();
            return Type::void();
        }
        self.parse_type()
    }

    /// `true` if what follows looks like `type Identifier`, the shape that
    /// distinguishes a local variable declaration from a statement that
    /// merely starts with a name (a call, an assignment, a bare
    /// field/array access). A basic type can only start a declaration, so
    /// it commits immediately; a reference type needs arbitrary
    /// lookahead past its dotted name and any `[]` suffixes to see
    /// whether another identifier follows.
    pub fn see_local_variable_declaration(&mut self) -> bool {
        if self.see_basic_type() {
            return true;
        }
        if !self.see_reference_type() {
            return false;
        }
        self.record_position();
        self.advance();
        while self.see(TokenKind::Dot) && self.peek(1).kind == TokenKind::Identifier {
            self.advance();
            self.advance();
        }
        while self.see_dims() {
            self.advance();
            self.advance();
        }
        let result = self.see(TokenKind::Identifier);
        self.return_to_position();
        result
    }
}
