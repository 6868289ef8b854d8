#![no_main]
use diractex_core::render::render_equation;
use diractex_core::Invocation;
use libfuzzer_sys::fuzz_target;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    // First byte picks the line length and exit status, the rest is split
    // into an expression and a fake dirac output at the first NUL.
    let Some((&control, rest)) = data.split_first() else {
        return;
    };
    let text = String::from_utf8_lossy(rest);
    let (expression, output) = text.split_once('\0').unwrap_or((&*text, ""));

    let line_length = u32::from(control & 0x7f);
    let succeeded = control & 0x80 == 0;

    let inv = Invocation::new("", expression).with_line_length(line_length);
    let line = inv.command_line(Path::new("dirac"));
    assert!(line.contains(expression));
    assert_eq!(inv.arguments()[1], expression);

    let rendered = render_equation(inv.display_lhs(), output, line_length, succeeded);
    assert!(rendered.starts_with("\\begin{equation}\n"));
    assert!(rendered.ends_with("\n\\end{equation}"));
    if line_length > 0 && succeeded {
        assert!(rendered.starts_with("\\begin{equation}\n\\begin{split}\n"));
    }
});
