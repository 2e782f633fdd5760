use minijava_span::Span;

/// A node in the abstract syntax tree.
///
/// Every AST node can report the source line it started on. Unlike a
/// general-purpose compiler IR there is no separate node-id space here:
/// nothing downstream of this crate needs to key a side table by node, so
/// the span alone is enough identity.
pub trait Node: std::fmt::Debug + std::fmt::Display + Clone + PartialEq {
    /// Returns the span of the node.
    fn span(&self) -> Span;

    /// Sets the span of the node.
    fn set_span(&mut self, span: Span);

    /// The 1-based source line the node starts on.
    fn line(&self) -> u32 {
        self.span().line()
    }
}

#[macro_export]
macro_rules! simple_node_impl {
    ($ty:ty) => {
        impl $crate::Node for $ty {
            fn span(&self) -> minijava_span::Span {
                self.span
            }

            fn set_span(&mut self, span: minijava_span::Span) {
                self.span = span;
            }
        }
    };
}
