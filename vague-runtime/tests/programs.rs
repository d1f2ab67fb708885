//! Integration tests running whole Vague programs

use vague_lexer::load;
use vague_runtime::{
    CapturedOutput, ExecutionResult, HaltReason, Mode, RuntimeError, ScanDirection, StackLevel,
    VMConfig, VM,
};
use vague_spec::Value;

fn run_with(source: &str, config: VMConfig) -> (Result<ExecutionResult, RuntimeError>, String) {
    let program = load(source).unwrap();
    let mut vm = VM::new(program, CapturedOutput::new(), config);
    let result = vm.run();
    (result, vm.output().text())
}

fn run(source: &str) -> (ExecutionResult, String) {
    let (result, out) = run_with(source, VMConfig::default());
    (result.unwrap(), out)
}

#[test]
fn test_print_zero() {
    assert_eq!(run("0!").1, "\0");
}

#[test]
fn test_true_does_not_touch_accumulator() {
    let (result, out) = run("t!");
    assert_eq!(out, "\0");
    assert_eq!(result.state.accumulator, Value::ZERO);
    assert_eq!(result.state.top_stack()[0], Value::TRUE);
}

#[test]
fn test_rotate_singleton_outer_level() {
    let (result, out) = run("ttt>!");
    assert_eq!(out, "\0");
    assert_eq!(result.state.top_stack().len(), 3);
}

#[test]
fn test_comments_are_ignored() {
    let (_, commented) = run("Mode 2; push a value t; pop _; show !\n");
    let (_, bare) = run("2t_!");
    assert_eq!(commented, bare);
    assert_eq!(bare, "true");
}

#[test]
fn test_loop_runs_n_times() {
    // acc = 5 from 1 + 1 doubled + 1 + 1 + 1
    let (result, out) = run("2 t+ =+ t+ t+ t+ ( ! - )");
    assert_eq!(out.chars().count(), 5);
    assert_eq!(
        out.chars().map(|c| c as u32).collect::<Vec<_>>(),
        vec![5, 4, 3, 2, 1]
    );
    assert_eq!(result.state.accumulator, Value::ZERO);
}

#[test]
fn test_loop_with_falsy_accumulator_never_runs() {
    let (_, out) = run("(!)");
    assert!(out.is_empty());

    // false is falsy too
    let (_, out) = run("2f_(!)");
    assert!(out.is_empty());
}

#[test]
fn test_boolean_loop_condition() {
    // true decrements to false, so the body runs once
    let (result, out) = run("2t_(!-)");
    assert_eq!(out, "true");
    assert_eq!(result.state.accumulator, Value::FALSE);
}

#[test]
fn test_nested_loops() {
    // outer counter 2, inner loop prints the counter copy down to 1
    let (_, out) = run("2 t+ =+ ( = ( ! - ) _ - )");
    assert_eq!(
        out.chars().map(|c| c as u32).collect::<Vec<_>>(),
        vec![2, 1, 1]
    );
}

#[test]
fn test_one_d_push_grows_outer_level() {
    let (result, _) = run("tt=");
    assert_eq!(result.state.mode, Mode::OneD);
    assert_eq!(result.state.depth(), 2);
    assert!(result.state.top_stack().is_empty());
    assert_eq!(result.state.stacks()[1].len(), 2);
}

#[test]
fn test_two_d_push_appends_value() {
    let (result, _) = run("tt2=");
    assert_eq!(result.state.mode, Mode::TwoD);
    assert_eq!(result.state.depth(), 1);
    assert_eq!(
        result.state.top_stack().iter().copied().collect::<Vec<_>>(),
        vec![Value::TRUE, Value::TRUE, Value::ZERO]
    );
}

#[test]
fn test_two_d_rotate_moves_stacks() {
    // two stacks: [[], [true]] -> rotate in TwoD -> [[true], []]
    let (result, out) = run("t=2>_!");
    assert_eq!(out, "true");
    assert_eq!(result.state.depth(), 2);
}

#[test]
fn test_one_d_rotate_moves_values() {
    // [true, false] -> rotate right -> [false, true], then pop false
    let (_, out) = run("tf>2_!");
    assert_eq!(out, "false");

    let (_, out) = run("tf><2_!");
    assert_eq!(out, "true");
}

#[test]
fn test_mode_switches_back() {
    let (result, _) = run("21=");
    assert_eq!(result.state.mode, Mode::OneD);
    assert_eq!(result.state.depth(), 2);
}

#[test]
fn test_nand_and_add_values() {
    // true nand true = false
    let (_, out) = run("2tt_&!");
    assert_eq!(out, "false");

    // true + true = 2
    let (result, _) = run("2tt_+");
    assert_eq!(result.state.accumulator, Value::Integer(2));

    // false - 1 = -1 prints as U+FFFF
    let (_, out) = run("2f_-!");
    assert_eq!(out, "\u{FFFF}");
}

#[test]
fn test_end_stops_immediately() {
    let (result, out) = run("0!.0!");
    assert_eq!(out, "\0");
    assert_eq!(result.halt_reason, HaltReason::End { ip: 2 });
}

#[test]
fn test_value_underflow() {
    for source in ["+", "&", "2_"] {
        let (result, _) = run_with(source, VMConfig::default());
        assert!(
            matches!(
                result,
                Err(RuntimeError::StackUnderflow {
                    level: StackLevel::Inner,
                    ..
                })
            ),
            "{source}"
        );
    }
}

#[test]
fn test_last_stack_cannot_be_popped() {
    let (result, _) = run_with("_", VMConfig::default());
    let err = result.unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::StackUnderflow {
            ip: 0,
            level: StackLevel::Outer
        }
    ));
    assert!(err.to_string().contains("stack of stacks"));
}

#[test]
fn test_ill_nested_loops_fault() {
    let (result, _) = run_with("-)(", VMConfig::default());
    assert!(matches!(
        result,
        Err(RuntimeError::JumpOutOfRange {
            ip: 1,
            direction: ScanDirection::Backward
        })
    ));

    let (result, _) = run_with(")(", VMConfig::default());
    assert!(matches!(
        result,
        Err(RuntimeError::JumpOutOfRange {
            ip: 1,
            direction: ScanDirection::Forward
        })
    ));
}

#[test]
fn test_ill_nested_loop_not_taken_is_harmless() {
    // `)` falls through with a falsy accumulator and `(` is entered with a truthy one
    let (result, out) = run("0)t+(!");
    assert_eq!(out, "\u{1}");
    assert_eq!(result.halt_reason, HaltReason::EndOfProgram);
}

#[test]
fn test_output_kept_after_fault() {
    let (result, out) = run_with("0!0!+", VMConfig::default());
    assert!(result.is_err());
    assert_eq!(out, "\0\0");
}

#[test]
fn test_step_limit_stops_infinite_loop() {
    let (result, out) = run_with(
        "t+(!)",
        VMConfig {
            max_steps: Some(30),
            ..Default::default()
        },
    );
    let result = result.unwrap();
    assert_eq!(result.halt_reason, HaltReason::StepLimit);
    assert_eq!(result.steps, 30);
    // two setup steps, then `(`, `!`, `)` per iteration
    assert_eq!(out.chars().count(), 9);
}
