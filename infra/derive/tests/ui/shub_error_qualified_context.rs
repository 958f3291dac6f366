#[shub_derive::shub_error]
#[derive(Debug)]
pub enum DemoError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse {
        source: std::num::ParseIntError,
        context: std::option::Option<std::borrow::Cow<'static, str>>,
    },
}

fn main() {}
