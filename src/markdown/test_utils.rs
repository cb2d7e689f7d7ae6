use std::fs;

#[macro_export]
macro_rules! rewrite_assert_eq {
    ($left:expr , $right:expr) => {
        assert_eq!(rewrite(&$left), $right);
    };
}

#[macro_export]
macro_rules! header_tests {
    () => {
        seq_macro::seq!(N in 1..=6 {
            #[test]
            fn it_renders_header_~N() {
                let header = "#".repeat(N as usize);
                let text = format!("{header} some cool header");
                let expected = format!("<h{}>some cool header</h{}>", N, N);
                rewrite_assert_eq!(text, expected);
            }
        });
    };
}

pub fn load_markdown(file: &str) -> String {
    let file = format!("tests/markdown/{file}.md");
    read_to_string(&file)
}

pub fn load_output(file: &str) -> String {
    let file = format!("tests/markdown/{file}.html");
    String::from(read_to_string(&file).trim_end())
}

fn read_to_string(file: &str) -> String {
    fs::read_to_string(file)
        .unwrap_or_else(|err| panic!("could not find test file {file}: {err}"))
}
