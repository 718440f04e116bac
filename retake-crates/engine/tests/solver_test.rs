#![cfg(test)]
use std::time::Duration;

use retake_engine::branching::branchers::independent_variable_value_brancher::IndependentVariableValueBrancher;
use retake_engine::branching::value_selection::InDomainMin;
use retake_engine::branching::variable_selection::InputOrder;
use retake_engine::constraints;
use retake_engine::optimisation::linear_sat_unsat::LinearSatUnsat;
use retake_engine::optimisation::OptimisationDirection;
use retake_engine::predicate;
use retake_engine::results::OptimisationResult;
use retake_engine::results::ProblemSolution;
use retake_engine::results::SatisfactionResult;
use retake_engine::results::Solution;
use retake_engine::termination::Combinator;
use retake_engine::termination::Indefinite;
use retake_engine::termination::TimeBudget;
use retake_engine::variables::DomainId;
use retake_engine::ConstraintOperationError;
use retake_engine::Solver;

/// Four exams over two days of three periods each, at most two exams per day.
fn capped_days() -> (Solver, Vec<DomainId>, DomainId) {
    let mut solver = Solver::default();
    let exams = (0..4)
        .map(|index| solver.new_named_bounded_integer(0, 5, format!("exam_{index}")))
        .collect::<Vec<_>>();

    for i in 0..exams.len() {
        for j in i + 1..exams.len() {
            solver
                .add_constraint(constraints::binary_not_equals(exams[i], exams[j]))
                .post()
                .expect("not infeasible");
        }
    }

    for day in [0..=2, 3..=5] {
        let literals = exams
            .iter()
            .map(|&exam| {
                let literal = solver.new_literal();
                solver
                    .add_constraint(constraints::in_range_reified(exam, day.clone(), literal))
                    .post()
                    .expect("not infeasible");
                literal
            })
            .collect::<Vec<_>>();
        solver
            .add_constraint(constraints::less_than_or_equals(literals, 2))
            .post()
            .expect("not infeasible");
    }

    let makespan = solver.new_bounded_integer(0, 5);
    solver
        .add_constraint(constraints::maximum(exams.clone(), makespan))
        .post()
        .expect("not infeasible");

    (solver, exams, makespan)
}

fn exams_per_day(solution: &Solution, exams: &[DomainId]) -> [usize; 2] {
    let mut counts = [0; 2];
    for &exam in exams {
        counts[solution.get_integer_value(exam) as usize / 3] += 1;
    }
    counts
}

#[test]
fn daily_cap_forces_exams_onto_the_second_day() {
    let (mut solver, exams, makespan) = capped_days();
    let mut brancher = solver.default_brancher();

    let result = solver.optimise(
        &mut brancher,
        &mut Indefinite,
        LinearSatUnsat::new(
            OptimisationDirection::Minimise,
            makespan,
            |_: &Solver, _: &Solution| {},
        ),
    );

    let OptimisationResult::Optimal(solution) = result else {
        panic!("the model has an optimal solution, got {result:?}");
    };
    assert_eq!(solution.get_integer_value(makespan), 4);
    assert_eq!(exams_per_day(&solution, &exams), [2, 2]);
}

#[test]
fn optimisation_is_deterministic() {
    let solve = || {
        let (mut solver, exams, makespan) = capped_days();
        let mut brancher = solver.default_brancher();
        let result = solver.optimise(
            &mut brancher,
            &mut Combinator::new(Indefinite, TimeBudget::starting_now(Duration::from_secs(60))),
            LinearSatUnsat::new(
                OptimisationDirection::Minimise,
                makespan,
                |_: &Solver, _: &Solution| {},
            ),
        );
        match result {
            OptimisationResult::Optimal(solution) => exams
                .iter()
                .map(|&exam| solution.get_integer_value(exam))
                .collect::<Vec<_>>(),
            other => panic!("expected an optimal solution, got {other:?}"),
        }
    };

    assert_eq!(solve(), solve());
}

#[test]
fn input_order_brancher_assigns_in_the_given_order() {
    let mut solver = Solver::default();
    let x = solver.new_sparse_integer(vec![1, 4, 6]);
    let y = solver.new_sparse_integer(vec![1, 4, 6]);
    solver
        .add_constraint(constraints::binary_not_equals(x, y))
        .post()
        .expect("not infeasible");

    let mut brancher = IndependentVariableValueBrancher::new(InputOrder::new(&[y, x]), InDomainMin);

    let SatisfactionResult::Satisfiable(solution) = solver.satisfy(&mut brancher, &mut Indefinite)
    else {
        panic!("the model is satisfiable");
    };
    assert_eq!(solution.get_integer_value(y), 1);
    assert_eq!(solution.get_integer_value(x), 4);
}

#[test]
fn shared_exams_are_synchronised() {
    let mut solver = Solver::default();
    let a = solver.new_sparse_integer(vec![0, 2, 5]);
    let b = solver.new_sparse_integer(vec![2, 3, 5]);
    solver
        .add_constraint(constraints::binary_equals(a, b))
        .post()
        .expect("not infeasible");

    assert_eq!(solver.domain_size(a), 2);
    assert_eq!(solver.lower_bound(b), 2);
    assert_eq!(solver.upper_bound(b), 5);
}

#[test]
fn posting_after_a_root_conflict_reports_the_infeasible_state() {
    let mut solver = Solver::default();
    let a = solver.new_sparse_integer(vec![0, 1]);
    let b = solver.new_sparse_integer(vec![2, 3]);

    let first = solver.add_constraint(constraints::binary_equals(a, b)).post();
    let second = solver
        .add_constraint(constraints::binary_not_equals(a, b))
        .post();

    assert_eq!(first, Err(ConstraintOperationError::InfeasiblePropagator));
    assert_eq!(second, Err(ConstraintOperationError::InfeasibleState));
    assert!(solver.is_infeasible());
}

#[test]
fn root_predicates_are_permanent() {
    let mut solver = Solver::default();
    let x = solver.new_bounded_integer(0, 9);

    solver
        .add_root_predicate(predicate!(x != 0))
        .expect("not infeasible");
    solver
        .add_root_predicate(predicate!(x <= 3))
        .expect("not infeasible");

    assert_eq!(solver.lower_bound(x), 1);
    assert_eq!(solver.upper_bound(x), 3);
}

#[test]
fn capacity_reasoning_proves_the_makespan_without_enumerating_orderings() {
    // Eight exams over three days of eight periods, at most three per day: the last exam cannot
    // be before the second period of the third day.
    let mut solver = Solver::default();
    let exams = (0..8)
        .map(|_| solver.new_bounded_integer(0, 23))
        .collect::<Vec<_>>();
    solver
        .add_constraint(constraints::all_different_with_capacity(
            exams.clone(),
            [0..=7, 8..=15, 16..=23],
            3,
        ))
        .post()
        .expect("not infeasible");
    let makespan = solver.new_bounded_integer(0, 23);
    solver
        .add_constraint(constraints::maximum(exams.clone(), makespan))
        .post()
        .expect("not infeasible");
    let mut brancher = solver.default_brancher();

    let result = solver.optimise(
        &mut brancher,
        &mut Combinator::new(Indefinite, TimeBudget::starting_now(Duration::from_secs(10))),
        LinearSatUnsat::new(
            OptimisationDirection::Minimise,
            makespan,
            |_: &Solver, _: &Solution| {},
        ),
    );

    let OptimisationResult::Optimal(solution) = result else {
        panic!("the makespan should be proven minimal, got {result:?}");
    };
    assert_eq!(solution.get_integer_value(makespan), 17);
}

#[test]
fn a_constraint_is_only_added_when_posted() {
    let mut solver = Solver::default();
    let a = solver.new_sparse_integer(vec![0, 2, 5]);
    let b = solver.new_sparse_integer(vec![2, 3]);

    drop(solver.add_constraint(constraints::binary_equals(a, b)));
    assert_eq!(solver.domain_size(a), 3);

    solver
        .add_constraint(constraints::binary_equals(a, b))
        .post()
        .expect("not infeasible");
    assert_eq!(solver.domain_size(a), 1);
}
