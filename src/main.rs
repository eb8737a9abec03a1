use std::path::Path;

use exprgen::{
    emit::{EmitOptions, emit},
    schema::Schema,
};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let outfile = match &args[..] {
        [] => "src/expr.h",
        [outfile] => outfile.as_str(),
        _ => panic!("invalid args: {args:?}\nexpected: [outfile]"),
    };

    let out = match emit(&Schema::lox(), &EmitOptions::default()) {
        Ok(out) => out,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    if outfile == "-" {
        use std::io::Write as _;
        std::io::stdout().write_all(out.as_bytes()).unwrap();
    } else {
        let outfile = Path::new(outfile);
        if let Some(parent) = outfile.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).expect("failed to create parent directories");
        }
        std::fs::write(outfile, out).expect("failed to write file");
        clang_format(outfile);
    }
}

/// The beautifier pass. A missing tool or a non-zero exit is reported and
/// otherwise ignored; the written unit is already syntactically complete.
fn clang_format(path: &Path) {
    match std::process::Command::new("clang-format")
        .arg("-i")
        .arg(path)
        .status()
    {
        Ok(status) if status.success() => {}
        Ok(status) => eprintln!("clang-format exited with {status}"),
        Err(err) => eprintln!("failed to run clang-format: {err}"),
    }
}
