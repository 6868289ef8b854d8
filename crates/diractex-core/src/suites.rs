//! Built-in suites: the dirac regression document and the sixth-order Fierz table.

use crate::invocation::Invocation;
use crate::suite::{EntryLayout, Suite};

/// Rows `(f0, f1, f2)` of the sixth-order Fierz table.
pub const FIERZ_FORMS: [[&str; 3]; 11] = [
    ["1", "1", "1"],
    ["1", r"\gamma_\mu", r"\gamma^\mu"],
    ["1", r"\sigma_{\mu\nu}", r"\sigma^{\mu\nu}"],
    ["1", r"\gamma5\gamma_\mu", r"\gamma5\gamma^\mu"],
    ["1", r"\gamma5", r"\gamma5"],
    [r"\gamma5", r"\gamma_\mu", r"\gamma5\gamma^\mu"],
    [r"\gamma_\mu", r"\gamma_\nu", r"\sigma^{\mu\nu}"],
    [r"\gamma5\gamma_\mu", r"\gamma5\gamma_\nu", r"\sigma^{\mu\nu}"],
    [
        r"\epsilon_{\kappa\lambda\mu\nu}\gamma^\kappa",
        r"\gamma5\gamma^\lambda",
        r"\sigma^{\mu\nu}",
    ],
    [
        r"\epsilon_{\kappa\lambda\mu\nu}\gamma5",
        r"\sigma^{\kappa\lambda}",
        r"\sigma^{\mu\nu}",
    ],
    [
        r"{\sigma_\kappa}^\lambda",
        r"{\sigma_\lambda}^\mu",
        r"{\sigma_\mu}^\kappa",
    ],
];

/// Dirac basis inserted between `f0` and `f1`.
pub const FIERZ_FIRST_BASIS: [&str; 5] = [
    "1",
    r"\gamma_\alpha",
    r"\sigma_{\alpha\beta}",
    r"\gamma5\gamma_\alpha",
    r"\gamma5",
];

/// Dirac basis inserted between `f1` and `f2`.
pub const FIERZ_SECOND_BASIS: [&str; 5] = [
    "1",
    r"\gamma_\gamma",
    r"\sigma_{\gamma\delta}",
    r"\gamma5\gamma_\gamma",
    r"\gamma5",
];

/// Terms per line requested for every Fierz product.
pub const FIERZ_LINE_LENGTH: u32 = 4;

/// dirac spells the fifth gamma matrix `\gamma5`; the document shows `\gamma^5`.
pub fn display_gamma5(expression: &str) -> String {
    expression.replace(r"\gamma5", r"\gamma^5")
}

/// Every `f0 * m1 * f1 * m2 * f2` product, rows outermost, then the first basis, then the second.
pub fn fierz_suite() -> Suite {
    let mut invocations =
        Vec::with_capacity(FIERZ_FORMS.len() * FIERZ_FIRST_BASIS.len() * FIERZ_SECOND_BASIS.len());

    for [f0, f1, f2] in FIERZ_FORMS {
        for m1 in FIERZ_FIRST_BASIS {
            for m2 in FIERZ_SECOND_BASIS {
                let expression = format!("{f0}*{m1}*{f1}*{m2}*{f2}");
                let lhs = display_gamma5(&expression);
                invocations.push(
                    Invocation::new("", expression)
                        .with_lhs(lhs)
                        .with_line_length(FIERZ_LINE_LENGTH),
                );
            }
        }
    }

    Suite::new("fierz6", EntryLayout::EquationOnly, invocations)
}

/// The hand-written regression cases, in document order.
pub fn test_suite() -> Suite {
    let invocations = vec![
        Invocation::new("Invalid input", "foo"),
        Invocation::new("Kronecker trace", r"\delta_\mu^\mu"),
        Invocation::new(
            "Product of Levi-Civita symbols",
            r"\epsilon_{\alpha\beta\gamma\delta}\epsilon_{\kappa\lambda\mu\nu}",
        )
        .with_line_length(5),
        Invocation::new(
            "Product of Levi-Civita symbols with a contraction",
            r"\epsilon_{\alpha\beta\gamma\delta}{\epsilon^\delta}_{\lambda\mu\nu}",
        )
        .with_line_length(3),
        Invocation::new(
            "Product of Levi-Civita symbols with two contractions",
            r"\epsilon_{\alpha\beta\gamma\delta}{\epsilon^{\delta\gamma}}_{\mu\nu}",
        )
        .with_line_length(3),
        Invocation::new("Product of two gamma matrices", r"\gamma^\mu\gamma^\nu"),
        Invocation::new(r"Product of $\gamma$ and $\gamma^5$", r"\gamma^\mu\gamma5")
            .with_lhs(r"\gamma^\mu\gamma^5"),
        Invocation::new(
            r"$\gamma^5$ sandwiched between two $\gamma$",
            r"\gamma^\mu\gamma5\gamma^\nu",
        )
        .with_lhs(r"\gamma^\mu\gamma^5\gamma^\nu"),
        Invocation::new(
            "Product of three gamma matrices",
            r"\gamma^\lambda\gamma^\mu\gamma^\nu",
        ),
        Invocation::new(
            "Product of four gamma matrices",
            r"\gamma^\kappa\gamma^\lambda\gamma^\mu\gamma^\nu",
        )
        .with_line_length(6),
        Invocation::new(
            r#"One-gamma "sandwich""#,
            r"\gamma_\lambda\gamma^\mu\gamma^\lambda",
        ),
        Invocation::new(
            r#"Two-gamma "sandwich""#,
            r"\gamma_\lambda\gamma^\mu\gamma^\nu\gamma^\lambda",
        ),
        Invocation::new(
            r"$\sigma$-matrix multiplied by $\gamma$",
            r"\sigma^{\lambda\mu}\gamma^\nu",
        ),
        Invocation::new(
            r"Same as the above but with $\sigma$ expanded",
            r"\I / 2 {\gamma^\lambda\gamma^\mu - \gamma^\mu\gamma^\lambda}\gamma^\nu",
        )
        .with_lhs(
            r"\frac{I}{2}\left[\gamma^\lambda\gamma^\mu - \gamma^\mu\gamma^\lambda\right]\gamma^\nu",
        ),
        Invocation::new(
            r"Product of two $\sigma$-matrices",
            r"\sigma^{\kappa\lambda}\sigma^{\mu\nu}",
        )
        .with_line_length(5),
        Invocation::new(
            r"Product of two expanded $\sigma$-matrices",
            concat!(
                r"- 1 / 4 {\gamma^\kappa\gamma^\lambda - \gamma^\lambda\gamma^\kappa}",
                r"{\gamma^\mu\gamma^\nu - \gamma^\nu\gamma^\mu}",
            ),
        )
        .with_lhs(concat!(
            r"- \frac{1}{4}\left[\gamma^\kappa\gamma^\lambda - \gamma^\lambda\gamma^\kappa\right]",
            r"\left[\gamma^\mu\gamma^\nu - \gamma^\nu\gamma^\mu\right]",
        ))
        .with_line_length(5),
        Invocation::new(
            r"$\sigma$-matrix multiplied by $\gamma^5\gamma^\nu$",
            r"\sigma^{\lambda\mu}\gamma5\gamma^\nu",
        )
        .with_lhs(r"\sigma^{\lambda\mu}\gamma^5\gamma^\nu"),
        Invocation::new(
            r"Expanded $\sigma$-matrix multiplied by $\gamma^5\gamma^\nu$",
            r"\I / 2 {\gamma^\lambda\gamma^\mu - \gamma^\mu\gamma^\lambda}\gamma5\gamma^\nu",
        )
        .with_lhs(
            r"\frac{I}{2}\left[\gamma^\lambda\gamma^\mu - \gamma^\mu\gamma^\lambda\right]\gamma^5\gamma^\nu",
        ),
        Invocation::new(
            r"Product of $\sigma$ and $\gamma^5$ matrices",
            r"\sigma^{\lambda\mu}\gamma5",
        )
        .with_lhs(r"\sigma^{\lambda\mu}\gamma^5"),
        Invocation::new("Same as above in the reverse order", r"\gamma5\sigma^{\lambda\mu}")
            .with_lhs(r"\gamma^5\sigma^{\lambda\mu}"),
    ];

    Suite::new("tests", EntryLayout::Described, invocations)
}
