use swc_core::{
    common::{BytePos, Span},
    ecma::ast::{EsVersion, Expr, Module},
};
use swc_ecma_parser::{lexer::Lexer, EsConfig, Parser, StringInput, Syntax};

pub fn parse_module(input: &str) -> Module {
    let span = Span::new(BytePos(0), BytePos(input.len() as u32));

    let lexer = Lexer::new(
        Syntax::Es(EsConfig::default()),
        EsVersion::EsNext,
        StringInput::new(input, span.lo, span.hi),
        None,
    );

    Parser::new_from(lexer)
        .parse_module()
        .expect("test input must be parseable")
}

pub fn parse_expr(input: &str) -> Box<Expr> {
    let span = Span::new(BytePos(0), BytePos(input.len() as u32));

    let lexer = Lexer::new(
        Syntax::Es(EsConfig::default()),
        EsVersion::EsNext,
        StringInput::new(input, span.lo, span.hi),
        None,
    );

    let expr = Parser::new_from(lexer)
        .parse_expr()
        .expect("test input must be parseable");

    match *expr {
        Expr::Paren(paren) => paren.expr,
        other => Box::new(other),
    }
}
