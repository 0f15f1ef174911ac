use stepcalc::{
    engine::{
        bindings::Variables,
        block::{Block, extract_blocks, select_block},
        driver::{Engine, EngineState},
        expression::Expression,
        operator::Operator,
        reducer::reduce_block,
        token::{Token, TokenKind},
        tokenizer::tokenize,
    },
    error::{ParseError, RuntimeError},
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn values(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.value.as_str()).collect()
}

fn block(id: usize, priority: usize, start: usize, end: usize) -> Block {
    Block { id,
            priority,
            start,
            end }
}

#[test]
fn simple_expression_parses() {
    init_logger();
    let mut engine = Engine::new();

    let outcome = engine.parse("2+2*10");

    assert!(outcome.success);
    assert_eq!(outcome.message, "Parsing complete.");
    assert_eq!(engine.tokens().len(), 5);
    assert_eq!(engine.blocks(), [block(1, 0, 0, 5)]);
    assert_eq!(engine.state(), EngineState::Parsed);
}

#[test]
fn nested_expressions_parse() {
    init_logger();
    let mut engine = Engine::new();

    assert!(engine.parse("2+2*(10-2/(-8))").success);
    assert_eq!(engine.tokens().len(), 13);
    assert_eq!(engine.blocks().len(), 4);

    assert!(engine.parse("-200.55/20+(8.75*10)**2-10+(5*(-10+2))").success);
    assert_eq!(engine.tokens().len(), 23);
    assert_eq!(engine.blocks().len(), 6);
    assert_eq!(engine.tokens()[0].value, "-200.55");
    assert_eq!(engine.tokens()[9].value, "**");
    assert_eq!(engine.tokens()[18].value, "-10");
}

#[test]
fn variables_are_substituted() {
    init_logger();
    let mut engine = Engine::new();

    let outcome = engine.parse(r#"20*a+(50/44),{"a":6}"#);

    assert!(outcome.success);
    assert_eq!(engine.tokens()[2],
               Token { kind:  TokenKind::Number,
                       value: "6".to_string(), });
    assert_eq!(engine.tokens().len(), 9);
    assert_eq!(engine.blocks().len(), 2);
    assert_eq!(engine.source(), r#"20*a+(50/44),{"a":6}"#);

    let result = engine.evaluate_all().unwrap();
    assert!(result.complete);
    assert_eq!(result.value, 20.0 * 6.0 + (50.0 / 44.0));
}

#[test]
fn parse_failures_report_messages() {
    init_logger();
    let mut engine = Engine::new();

    let cases = [("*20+20+asdf3", "Not a valid number. (asdf3)"),
                 ("*20+20", "Misplaced operator at first index."),
                 ("20+20-", "Misplaced operator at last index."),
                 ("20+20//4", "Misplaced operator."),
                 ("20+20*(20+(5.5/2)))", "Odd number of parenthesis."),
                 ("", "Expression is empty.")];

    for (input, message) in cases {
        let outcome = engine.parse(input);
        assert!(!outcome.success, "{input:?} should fail");
        assert_eq!(outcome.message, message);
        assert_eq!(engine.state(), EngineState::Empty);
    }
}

#[test]
fn failed_parse_leaves_error_token() {
    init_logger();
    let mut engine = Engine::new();

    assert!(engine.parse("2+2").success);
    assert!(!engine.parse("20+20*(20+(5.5/2)))").success);

    assert_eq!(engine.tokens(), [Token::error("Odd number of parenthesis.")]);
    assert!(engine.blocks().is_empty());
    assert_eq!(engine.error(), Some(&ParseError::OddParenthesis));
    assert_eq!(engine.source(), "20+20*(20+(5.5/2)))");
    assert_eq!(engine.evaluate_next(), Err(RuntimeError::NotParsed));
}

#[test]
fn structural_errors() {
    let parse = |input: &str| Expression::parse(input).err();

    assert_eq!(parse(")("), Some(ParseError::UnbalancedParenthesis));
    assert_eq!(parse("()"), Some(ParseError::EmptyParenthesis));
    assert_eq!(parse("(+2)"), Some(ParseError::MisplacedOperator));
    assert_eq!(parse("(2+)"), Some(ParseError::MisplacedOperator));
    assert_eq!(parse("2(3)"),
               Some(ParseError::MissingOperator { left:  "2".to_string(),
                                                  right: "(".to_string(), }));
    assert!(matches!(parse("a,{oops}"), Some(ParseError::MalformedVariableBindings { .. })));
}

#[test]
fn evaluate_all_reduces_to_one_token() {
    init_logger();
    let mut engine = Engine::new();

    assert!(engine.parse("20*10-50").success);
    let result = engine.evaluate_all().unwrap();

    assert!(result.complete);
    assert_eq!(result.value, 150.0);
    assert_eq!(result.tokens, [Token::number("150")]);
    assert_eq!(result.blocks, [block(1, 0, 0, 1)]);
    assert_eq!(engine.state(), EngineState::Complete);
}

#[test]
fn evaluate_next_resolves_innermost_block_first() {
    init_logger();
    let mut engine = Engine::new();
    assert!(engine.parse("20+(10*(5+5))").success);

    let first = engine.evaluate_next().unwrap();
    assert!(!first.complete);
    assert_eq!(first.value, 10.0);
    assert_eq!(values(&first.tokens), ["20", "+", "(", "10", "*", "10", ")"]);
    assert_eq!(engine.state(), EngineState::Reducing);

    let second = engine.evaluate_next().unwrap();
    assert!(!second.complete);
    assert_eq!(second.value, 100.0);
    assert_eq!(values(&second.tokens), ["20", "+", "100"]);

    let third = engine.evaluate_next().unwrap();
    assert!(third.complete);
    assert_eq!(third.value, 120.0);
    assert_eq!(values(&third.tokens), ["120"]);
    assert_eq!(engine.state(), EngineState::Complete);
}

#[test]
fn last_block_wins_ties() {
    let mut expression = Expression::parse("(1+2)*(3+4)").unwrap();

    assert_eq!(expression.blocks(),
               [block(1, 0, 0, 0), block(2, 1, 0, 5), block(3, 0, 5, 6), block(4, 1, 6, 11)]);
    assert_eq!(select_block(expression.blocks()), Some(&block(4, 1, 6, 11)));

    let step = expression.evaluate_next().unwrap();
    assert_eq!(step.value, 7.0);
    assert_eq!(step.render(), "( 1 + 2 ) * 7");

    let step = expression.evaluate_next().unwrap();
    assert_eq!(step.value, 3.0);
    assert_eq!(step.render(), "3 * 7");

    assert_eq!(expression.evaluate_all().unwrap().value, 21.0);
}

#[test]
fn single_number_completes_in_one_step() {
    let mut engine = Engine::new();
    assert!(engine.parse("42").success);
    assert_eq!(engine.state(), EngineState::Parsed);

    let step = engine.evaluate_next().unwrap();
    assert!(step.complete);
    assert_eq!(step.value, 42.0);
    assert_eq!(engine.state(), EngineState::Complete);
}

#[test]
fn unused_engine_refuses_to_evaluate() {
    let mut engine = Engine::new();

    assert_eq!(engine.state(), EngineState::Empty);
    assert_eq!(engine.evaluate_next(), Err(RuntimeError::NotParsed));
    assert_eq!(engine.evaluate_all(), Err(RuntimeError::NotParsed));
    assert!(engine.tokens().is_empty());
}

#[test]
fn tokenizer_minus_contract() {
    let vars = Variables::new();
    let split = |s: &str| tokenize(s, &vars).into_iter().map(|t| t.value).collect::<Vec<_>>();

    assert_eq!(split("-8"), ["-8"]);
    assert_eq!(split("(-8)"), ["(", "-8", ")"]);
    assert_eq!(split("5-3"), ["5", "-", "3"]);
    assert_eq!(split("5--3"), ["5", "-", "-3"]);
    assert_eq!(split("(2)-2"), ["(", "2", ")", "-", "2"]);
    assert_eq!(split("2*-(3)"), ["2", "*", "-", "(", "3", ")"]);
    assert_eq!(split("-(3)"), ["-", "(", "3", ")"]);
}

#[test]
fn tokenizer_splits_on_whitespace() {
    let vars = Variables::new();
    let split = |s: &str| tokenize(s, &vars).into_iter().map(|t| t.value).collect::<Vec<_>>();

    assert_eq!(split("2 3+1"), ["2", "3", "+", "1"]);
    assert_eq!(split("2* *3"), ["2", "*", "*", "3"]);
    assert_eq!(split("2**3"), ["2", "**", "3"]);
    assert_eq!(split(" -5"), ["-5"]);
    assert_eq!(split("( -8)"), ["(", "-8", ")"]);
    assert_eq!(split("2*- 5"), ["2", "*", "-", "5"]);

    assert_eq!(Expression::parse("2 3").err(),
               Some(ParseError::MissingOperator { left:  "2".to_string(),
                                                  right: "3".to_string(), }));
    assert_eq!(Expression::parse("2* *3").err(), Some(ParseError::MisplacedOperator));
}

#[test]
fn source_tokens_survive_reduction() {
    let mut engine = Engine::new();
    assert!(engine.parse("(1+2)*3").success);
    let parsed = engine.tokens().to_vec();

    engine.evaluate_all().unwrap();

    assert_eq!(values(engine.tokens()), ["9"]);
    assert_eq!(engine.source_tokens(), parsed.as_slice());
    assert_eq!(values(engine.source_tokens()), ["(", "1", "+", "2", ")", "*", "3"]);

    assert!(!engine.parse("2+").success);
    assert!(engine.source_tokens().is_empty());
}

#[test]
fn engine_hands_over_its_expression() {
    let mut engine = Engine::new();
    assert!(engine.parse("20+(10*(5+5))").success);
    engine.evaluate_next().unwrap();

    let mut expression = engine.into_expression().unwrap();
    assert_eq!(expression.step_count(), 1);
    assert_eq!(expression.evaluate_all().unwrap().value, 120.0);

    let mut engine = Engine::new();
    assert!(!engine.parse("*").success);
    assert!(engine.into_expression().is_none());
}

#[test]
fn tokenizer_kinds() {
    let tokens = tokenize("(1**2)%x", &[('x', 0.5)].into_iter().collect());

    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds,
               [TokenKind::Parenthesis,
                TokenKind::Number,
                TokenKind::Operator,
                TokenKind::Number,
                TokenKind::Parenthesis,
                TokenKind::Operator,
                TokenKind::Number]);
    assert_eq!(tokens[2].as_operator(), Some(Operator::Power));
    assert_eq!(tokens[6].value, "0.5");
}

#[test]
fn blocks_are_recomputed_after_each_step() {
    let mut expression = Expression::parse("(1+2)*3").unwrap();
    assert_eq!(expression.blocks(),
               [block(1, 0, 0, 0), block(2, 1, 0, 5), block(3, 0, 5, 7)]);

    assert_eq!(expression.blocks()[1].span(), 0..5);

    let step = expression.evaluate_next().unwrap();
    assert_eq!(step.blocks, [block(1, 0, 0, 3)]);
    assert_eq!(step.blocks, extract_blocks(&step.tokens));
}

#[test]
fn reducer_rejects_dangling_operators() {
    let mut tokens = vec![Token::number("2"), Token::operator(Operator::Add)];

    assert_eq!(reduce_block(&mut tokens, &block(1, 0, 0, 2)),
               Err(RuntimeError::MalformedBlock { start: 0, end: 2 }));
    assert_eq!(reduce_block(&mut tokens, &block(1, 0, 1, 1)),
               Err(RuntimeError::MalformedBlock { start: 1, end: 1 }));
}

#[test]
fn reducer_leaves_operatorless_block_untouched() {
    let mut tokens = vec![Token::number("2"), Token::number("3")];
    let block = extract_blocks(&tokens)[0].clone();

    assert_eq!(reduce_block(&mut tokens, &block), Ok("2".to_string()));
    assert_eq!(tokens.len(), 2);
}

#[test]
fn special_values_propagate() {
    let mut expression = Expression::parse("1/0-1").unwrap();
    let result = expression.evaluate_all().unwrap();
    assert_eq!(result.tokens, [Token::number("inf")]);

    let mut expression = Expression::parse("0/0*2").unwrap();
    assert!(expression.evaluate_all().unwrap().value.is_nan());

    let mut expression = Expression::parse("1**(1/0)").unwrap();
    assert_eq!(expression.evaluate_all().unwrap().value, 1.0);

    let mut expression = Expression::parse("1/(0*-1)").unwrap();
    assert_eq!(expression.evaluate_all().unwrap().value, f64::NEG_INFINITY);
}

#[test]
fn steps_iterator_stops_after_completion() {
    let mut expression = Expression::parse("((1+1)*(2+2))").unwrap();

    let steps: Vec<_> = expression.steps().collect::<Result<_, _>>().unwrap();
    assert_eq!(steps.len(), 3);
    assert!(steps.iter().rev().skip(1).all(|s| !s.complete));
    assert_eq!(steps.last().map(|s| s.value), Some(8.0));
    assert_eq!(expression.step_count(), 3);
    assert!(expression.is_complete());
}

#[test]
fn independent_expressions_evaluate_in_parallel() {
    let inputs = ["2+2*10", "20+(10*(5+5))", "(1+2)*(3+4)", r#"a**2,{"a":12}"#];

    let results: Vec<f64> = std::thread::scope(|scope| {
        let handles: Vec<_> = inputs.iter()
                                    .map(|input| {
                                        scope.spawn(move || {
                                                 let mut expression =
                                                     Expression::parse(input).unwrap();
                                                 expression.evaluate_all().unwrap().value
                                             })
                                    })
                                    .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(results, [22.0, 120.0, 21.0, 144.0]);
}
