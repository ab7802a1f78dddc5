//! Reusable C sources.

/// Entry point that depends on `helper()` from another unit
pub const MAIN_C: &str = r#"int helper(void);

int main(void) {
    return helper();
}
"#;

/// Defines `helper()`
pub const APP_C: &str = r#"int helper(void) {
    return 0;
}
"#;

/// Unrelated object bundled into the archive
pub const EXTRA_C: &str = r#"int extra_value(void) {
    return 42;
}
"#;

/// References a symbol nothing defines
pub const UNRESOLVED_C: &str = r#"int missing_symbol(void);

int main(void) {
    return missing_symbol();
}
"#;

/// Does not compile
pub const BROKEN_C: &str = "int main(void) { return 0 }\n";

/// Manifest for the end-to-end build
pub const BUILD_MANIFEST: &str = r#"[[build.compile]]
source = "main.c"
object = "main.o"

[[build.compile]]
source = "app.c"
object = "app.o"

[[build.compile]]
source = "extra.c"
object = "extra.o"

[build.archive]
objects = ["app.o", "extra.o"]
output = "libapp.a"

[build.link]
objects = ["main.o", "app.o"]
archive = "libapp.a"
output = "program"
"#;
