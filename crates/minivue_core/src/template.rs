use std::fmt;

use smallvec::SmallVec;
use swc_core::common::Span;

use crate::MiniAtom;

/// A part of the template Abstract Syntax Tree.
///
/// The container-format parser produces this tree; the transform passes
/// mutate it in place (each pipeline exclusively owns its input tree for
/// the duration of the call) and the stringifier serializes it.
///
/// ### `Element`
/// A basic markup tag node. Its starting tag can carry directives as well
/// as regular attributes, and it has zero or more children unless it is
/// self-closed.
///
/// ### `Text`
/// A static text leaf.
///
/// ### `Interpolation`
/// A dynamic expression inside `{{` and `}}` delimiters.
///
/// ### `CompoundExpr`
/// A mixed sequence of static text and expressions, produced when the
/// parser merges adjacent text and interpolations.
///
/// ### `Comment`
/// A vanilla markup comment. Comments are dropped from the output.
#[derive(Debug, Clone)]
pub enum Node {
    Root(RootNode),
    Element(ElementNode),
    Text(TextNode),
    Interpolation(Interpolation),
    CompoundExpr(CompoundExpression),
    Comment(CommentNode),
}

/// The root of a parsed template block.
#[derive(Debug, Clone, Default)]
pub struct RootNode {
    pub children: Vec<Node>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ElementNode {
    pub tag: MiniAtom,
    pub kind: ElementKind,
    pub props: Vec<ElementProp>,
    pub children: Vec<Node>,
    pub is_self_closing: bool,
    pub span: Span,
}

/// What the parser resolved a tag to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElementKind {
    #[default]
    Element,
    Component,
    Slot,
    Template,
}

/// A prop is either a regular (static) attribute or a directive.
#[derive(Debug, Clone)]
pub enum ElementProp {
    Attribute(AttributeNode),
    Directive(DirectiveNode),
}

#[derive(Debug, Clone)]
pub struct AttributeNode {
    pub name: MiniAtom,
    pub value: Option<TextNode>,
    pub span: Span,
}

/// An attribute-like template instruction carrying parsed expressions
/// instead of literal text, e.g. `v-on:click.stop="handler"` has
/// name `on`, argument `click`, modifier `stop` and expression `handler`.
#[derive(Debug, Clone, Default)]
pub struct DirectiveNode {
    pub name: MiniAtom,
    pub argument: Option<Expression>,
    pub expression: Option<Expression>,
    pub modifiers: SmallVec<[MiniAtom; 2]>,
    pub span: Span,
}

#[derive(Debug, Clone, Default)]
pub struct TextNode {
    pub content: MiniAtom,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct Interpolation {
    pub content: Expression,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct CommentNode {
    pub content: MiniAtom,
    pub span: Span,
}

/// An expression attached to a directive, an interpolation or a compound.
#[derive(Debug, Clone)]
pub enum Expression {
    Simple(SimpleExpression),
    Compound(CompoundExpression),
}

/// `is_static` decides serialization: static expressions render bare,
/// dynamic ones render inside `{{ }}` interpolation braces.
#[derive(Debug, Clone, Default)]
pub struct SimpleExpression {
    pub content: MiniAtom,
    pub is_static: bool,
    pub const_type: ConstType,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct CompoundExpression {
    pub children: Vec<CompoundChild>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum CompoundChild {
    Text(MiniAtom),
    Expr(Expression),
}

/// Constness class of an expression, from "re-evaluate every render"
/// up to "can be serialized into static markup".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum ConstType {
    #[default]
    NotConstant,
    CanSkipPatch,
    CanHoist,
    CanStringify,
}

impl SimpleExpression {
    pub fn new(content: impl Into<MiniAtom>, is_static: bool) -> SimpleExpression {
        SimpleExpression {
            content: content.into(),
            is_static,
            const_type: ConstType::NotConstant,
            span: Span::default(),
        }
    }

    /// A synthesized static expression, e.g. a rewritten directive name.
    pub fn synthesized(content: impl Into<MiniAtom>) -> SimpleExpression {
        SimpleExpression {
            content: content.into(),
            is_static: true,
            const_type: ConstType::CanStringify,
            span: Span::default(),
        }
    }

    pub fn dynamic(content: impl Into<MiniAtom>) -> SimpleExpression {
        SimpleExpression::new(content, false)
    }
}

impl Expression {
    pub fn as_simple(&self) -> Option<&SimpleExpression> {
        match self {
            Expression::Simple(expr) => Some(expr),
            Expression::Compound(_) => None,
        }
    }

    pub fn as_simple_mut(&mut self) -> Option<&mut SimpleExpression> {
        match self {
            Expression::Simple(expr) => Some(expr),
            Expression::Compound(_) => None,
        }
    }

    /// Whether the expression serializes without interpolation braces.
    pub fn is_static(&self) -> bool {
        match self {
            Expression::Simple(expr) => expr.is_static,
            Expression::Compound(_) => false,
        }
    }
}

impl From<SimpleExpression> for Expression {
    fn from(expr: SimpleExpression) -> Expression {
        Expression::Simple(expr)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Simple(expr) => f.write_str(&expr.content),
            Expression::Compound(compound) => fmt::Display::fmt(compound, f),
        }
    }
}

impl fmt::Display for CompoundExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for child in self.children.iter() {
            match child {
                CompoundChild::Text(text) => f.write_str(text)?,
                CompoundChild::Expr(expr) => fmt::Display::fmt(expr, f)?,
            }
        }
        Ok(())
    }
}

impl ElementNode {
    pub fn new(tag: impl Into<MiniAtom>) -> ElementNode {
        ElementNode {
            tag: tag.into(),
            kind: ElementKind::Element,
            props: Vec::new(),
            children: Vec::new(),
            is_self_closing: false,
            span: Span::default(),
        }
    }

    pub fn find_attribute(&self, name: &str) -> Option<&AttributeNode> {
        self.props.iter().find_map(|prop| match prop {
            ElementProp::Attribute(attr) if attr.name == name => Some(attr),
            _ => None,
        })
    }

    pub fn find_directive(&self, name: &str) -> Option<&DirectiveNode> {
        self.props.iter().find_map(|prop| match prop {
            ElementProp::Directive(dir) if dir.name == name => Some(dir),
            _ => None,
        })
    }

    pub fn has_directive(&self, name: &str) -> bool {
        self.find_directive(name).is_some()
    }

    /// Finds a dynamic binding (`v-bind`) whose static argument equals `arg`,
    /// e.g. `find_binding_mut("class")` for `:class="..."`.
    pub fn find_binding_mut(&mut self, arg: &str) -> Option<&mut DirectiveNode> {
        self.props.iter_mut().find_map(|prop| match prop {
            ElementProp::Directive(dir)
                if dir.name == "bind" && directive_argument_is(dir, arg) =>
            {
                Some(dir)
            }
            _ => None,
        })
    }

    /// Finds a static attribute or a dynamic binding named `name`,
    /// whichever is present.
    pub fn find_prop_mut(&mut self, name: &str) -> Option<&mut ElementProp> {
        self.props.iter_mut().find(|prop| match prop {
            ElementProp::Attribute(attr) => attr.name == name,
            ElementProp::Directive(dir) => {
                dir.name == "bind" && directive_argument_is(dir, name)
            }
        })
    }
}

fn directive_argument_is(dir: &DirectiveNode, name: &str) -> bool {
    matches!(
        dir.argument.as_ref().and_then(Expression::as_simple),
        Some(arg) if arg.is_static && arg.content == name
    )
}

impl AttributeNode {
    pub fn new(name: impl Into<MiniAtom>, value: Option<&str>) -> AttributeNode {
        AttributeNode {
            name: name.into(),
            value: value.map(|content| TextNode {
                content: content.into(),
                span: Span::default(),
            }),
            span: Span::default(),
        }
    }
}

impl DirectiveNode {
    /// A directive synthesized by a transform pass rather than parsed from
    /// source, e.g. the loop item/index/key companions of a rewritten loop.
    pub fn synthesized(
        name: impl Into<MiniAtom>,
        argument: SimpleExpression,
        expression: Option<SimpleExpression>,
    ) -> DirectiveNode {
        DirectiveNode {
            name: name.into(),
            argument: Some(argument.into()),
            expression: expression.map(Expression::from),
            modifiers: SmallVec::new(),
            span: Span::default(),
        }
    }
}

impl Node {
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }
}
