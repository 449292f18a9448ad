use crate::helpers::{EnvGuard, run_cli};
use serial_test::serial;

#[test]
#[serial]
fn every_template_computes_with_a_legal_target() {
    let _env = EnvGuard::apply(&[]);
    let listing = run_cli(&["templates", "--format", "json"]).json();
    for t in listing.as_array().unwrap() {
        let key = t["key"].as_str().unwrap();
        for seat in ["first", "second"] {
            let res = run_cli(&[
                "calc",
                "--template",
                key,
                "--seat",
                seat,
                "-t",
                "3:1",
                "--format",
                "json",
            ]);
            assert_eq!(res.exit_code, 0, "{key}/{seat}: {}", res.stderr);
            let json = res.json();
            assert_eq!(json["deck_size"], t["deck_size"]);
            let p = json["result"]["probability_at_least"].as_f64().unwrap();
            assert!(p > 0.0 && p < 1.0, "{key}/{seat}: {p}");
        }
    }
}

#[test]
#[serial]
fn going_second_never_lowers_the_odds() {
    let _env = EnvGuard::apply(&[]);
    let calc = |seat: &str| {
        run_cli(&[
            "calc", "--template", "yugioh", "--seat", seat, "-t", "3:1", "--format", "json",
        ])
        .json()["result"]["probability_at_least"]
            .as_f64()
            .unwrap()
    };
    assert!(calc("second") > calc("first"));
}

#[test]
#[serial]
fn pocket_template_draws_for_both_seats() {
    let _env = EnvGuard::apply(&[]);
    for seat in ["first", "second"] {
        let res = run_cli(&[
            "calc",
            "--template",
            "pokemon-pocket",
            "--seat",
            seat,
            "-t",
            "2:1",
            "--format",
            "json",
        ]);
        assert_eq!(res.json()["hand_size"], 6);
    }
}
