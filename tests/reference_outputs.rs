use approx::assert_relative_eq;
use arithmos::budget::{create_spend_chart, Category};
use arithmos::probability::{experiment, Hat};
use arithmos::{arrange, solver_report, Equation, ExperimentOptions, Roots};

/// Reference table from the formatter's exercise statement, answers included.
#[test]
fn arranged_table_with_answers() {
    let problems = ["32 - 698", "1 - 3801", "45 + 43", "123 + 49", "988 + 40"];
    let expected = [
        "   32         1      45      123      988",
        "- 698    - 3801    + 43    +  49    +  40",
        "-----    ------    ----    -----    -----",
        " -666     -3800      88      172     1028",
    ];
    assert_eq!(arrange(&problems, true), expected.join("\n"));
}

/// Every valid table has 3 rows, or 4 with answers, of equal length.
#[test]
fn table_rows_line_up() {
    let inputs: [&[&str]; 4] = [
        &["1 + 2"],
        &["11 + 4", "3801 - 2999"],
        &["1 + 2", "1 - 9380", "9999 + 9999"],
        &["44 + 815", "909 - 2", "45 + 43", "123 + 49", "888 + 40"],
    ];
    for problems in inputs {
        for show_answers in [false, true] {
            let table = arrange(problems, show_answers);
            let lines: Vec<&str> = table.lines().collect();
            assert_eq!(lines.len(), if show_answers { 4 } else { 3 });
            assert!(lines[..3].iter().all(|line| line.len() == lines[0].len()));
        }
    }
}

#[test]
fn six_problems_are_always_too_many() {
    let problems = ["1 + 1"; 6];
    assert_eq!(arrange(&problems, true), "Error: Too many problems.");
}

/// Report for `x² - 3x + 2 = 0`, matching the reference tool byte for byte.
#[test]
fn quadratic_report_with_two_roots() {
    let eq = Equation::quadratic(1.0, -3.0, 2.0).unwrap();
    let expected = "\n---Quadratic Equation---\n\n    x**2 -3x +2 = 0     \n\n\
                    -------Solutions--------\n\n      x1 = +2.000       \n      x2 = +1.000       \n\n\
                    --------Details---------\n\nconcavity = upwards\nmin = (1.500, -0.250)\n";
    assert_eq!(solver_report(&eq), expected);
}

#[test]
fn quadratic_roots_over_a_grid() {
    for a in [-3.0, -0.5, 1.0, 2.0] {
        for b in [-4.0, 0.0, 2.5] {
            for c in [-2.0, 0.0, 1.0] {
                let eq = Equation::quadratic(a, b, c).unwrap();
                let delta = b * b - 4.0 * a * c;
                match eq.solve() {
                    Roots::None => assert!(delta < 0.0),
                    Roots::Single(x) => {
                        assert_eq!(delta, 0.0);
                        assert_relative_eq!(x, -b / (2.0 * a));
                    }
                    Roots::Pair(x1, x2) => {
                        assert!(delta > 0.0);
                        assert_relative_eq!(x1 + x2, -b / a, epsilon = 1e-12);
                        assert_relative_eq!(x1 * x2, c / a, epsilon = 1e-12);
                    }
                }
            }
        }
    }
}

/// Ledger and chart from the budget exercise statement.
#[test]
fn budget_ledger_and_chart() {
    let mut food = Category::new("Food");
    let mut clothing = Category::new("Clothing");
    food.deposit(1000.0, "deposit");
    food.withdraw(10.15, "groceries").unwrap();
    food.withdraw(15.89, "restaurant and more food for dessert").unwrap();
    food.transfer(50.0, &mut clothing).unwrap();
    assert_eq!(
        food.to_string(),
        "*************Food*************\n\
         deposit                1000.00\n\
         groceries               -10.15\n\
         restaurant and more foo -15.89\n\
         Transfer to Clothing    -50.00\n\
         Total: 923.96"
    );

    let mut business = Category::new("Business");
    let mut food = Category::new("Food");
    let mut entertainment = Category::new("Entertainment");
    for category in [&mut business, &mut food, &mut entertainment] {
        category.deposit(900.0, "deposit");
    }
    food.withdraw(105.55, "").unwrap();
    entertainment.withdraw(33.40, "").unwrap();
    business.withdraw(10.99, "").unwrap();

    let expected = [
        "Percentage spent by category",
        "100|          ",
        " 90|          ",
        " 80|          ",
        " 70|    o     ",
        " 60|    o     ",
        " 50|    o     ",
        " 40|    o     ",
        " 30|    o     ",
        " 20|    o  o  ",
        " 10|    o  o  ",
        "  0| o  o  o  ",
        "    ----------",
        "     B  F  E  ",
        "     u  o  n  ",
        "     s  o  t  ",
        "     i  d  e  ",
        "     n     r  ",
        "     e     t  ",
        "     s     a  ",
        "     s     i  ",
        "           n  ",
        "           m  ",
        "           e  ",
        "           n  ",
        "           t  ",
    ];
    assert_eq!(
        create_spend_chart(&[&business, &food, &entertainment]),
        expected.join("\n")
    );
}

/// Exact probability of at least two red and one green ball among five drawn
/// from 6 black, 4 red and 3 green is 471/1287.
#[test]
fn simulated_probability_approaches_exact_value() {
    let hat = Hat::builder()
        .balls("black", 6)
        .balls("red", 4)
        .balls("green", 3)
        .build();
    let options = ExperimentOptions::default()
        .with_experiments(20_000)
        .with_seed(2024);
    let estimate = experiment(&hat, &[("red", 2), ("green", 1)], 5, &options).unwrap();
    assert_relative_eq!(estimate, 471.0 / 1287.0, epsilon = 0.02);
}
