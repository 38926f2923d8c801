//! End-to-end regeneration of Go sources from config entries.

use confgen_codegen::{Error, GenerationSummary, Generator, GoSource, LoaderPath};
use confgen_config::{ConfigSet, Format};
use pretty_assertions::assert_eq;

const SAMPLE_CONFIG: &str = r#"
c = 42
d = "x"

[a]
b = true
"#;

const SAMPLE_SOURCE: &str = "package config

import \"github.com/spf13/viper\"

// Unrelated is left alone.
var Unrelated = 1

// config vars
var (
\tOLD string
)

// app config func
func Load() {
\tprintln(\"old body\")
\tOLD = \"x\"
}

func untouched() {
\t// keep me
\t_ = Unrelated
}
";

const SAMPLE_EXPECTED: &str = "package config

import \"github.com/spf13/viper\"

// Unrelated is left alone.
var Unrelated = 1

// config vars
var (
\tA_B bool
\tC   int
\tD   string
)

// app config func
func Load() {
\tv := viper.New()
\tv.SetConfigName(`app`)
\tv.SetConfigType(`toml`)
\tv.AddConfigPath(`config`)
\terr := v.ReadInConfig()
\tif err != nil {
\t\tpanic(err)
\t}
\tA_B = v.GetBool(\"a.b\")
\tC = v.GetInt(\"c\")
\tD = v.GetString(\"d\")
}

func untouched() {
\t// keep me
\t_ = Unrelated
}
";

fn try_run(config: &str, go: &str, loader: &str) -> Result<(String, GenerationSummary), Error> {
    let set = ConfigSet::parse(config, Format::Toml, "config/app.toml").expect("valid config");
    let mut source = GoSource::parse(go, "config.go").expect("valid source");
    let summary = Generator::new(set.entries(), LoaderPath::new(loader)).generate(&mut source)?;
    Ok((source.print(), summary))
}

fn run(config: &str, go: &str) -> (String, GenerationSummary) {
    try_run(config, go, "config/app.toml").expect("generation succeeds")
}

#[test]
fn test_regenerates_marked_regions() {
    let (output, summary) = run(SAMPLE_CONFIG, SAMPLE_SOURCE);

    assert_eq!(output, SAMPLE_EXPECTED);
    assert_eq!(summary.vars_blocks, 1);
    assert_eq!(summary.config_funcs, vec!["Load".to_string()]);
}

#[test]
fn test_regeneration_is_idempotent() {
    let (first, _) = run(SAMPLE_CONFIG, SAMPLE_SOURCE);
    let (second, _) = run(SAMPLE_CONFIG, &first);

    assert_eq!(first, second);
}

#[test]
fn test_body_is_fully_replaced() {
    let (output, _) = run(SAMPLE_CONFIG, SAMPLE_SOURCE);

    assert!(!output.contains("old body"));
    assert!(!output.contains("OLD"));
}

#[test]
fn test_override_path_is_baked_into_body() {
    let (output, _) = try_run(SAMPLE_CONFIG, SAMPLE_SOURCE, "deploy/prod/service.yaml").unwrap();

    assert!(output.contains("v.SetConfigName(`service`)"));
    assert!(output.contains("v.SetConfigType(`yaml`)"));
    assert!(output.contains("v.AddConfigPath(`deploy/prod`)"));
    assert!(!output.contains("`app`"));
    // Declarations still come from the config that was read.
    assert!(output.contains("\tA_B bool\n"));
}

#[test]
fn test_single_var_with_marker_is_untouched() {
    let src = "package config\n\n// config vars\nvar OLD string\n";
    let (output, summary) = run(SAMPLE_CONFIG, src);

    assert_eq!(output, src);
    assert!(summary.is_empty());
}

#[test]
fn test_unmarked_source_is_byte_identical() {
    let src = "package config\n\n// plain vars\nvar (\n\tX    int // aligned\n\tLONG bool\n)\n\n/* block */ func f()   {\n\t  weird   :=  1\n\t_ = weird\n}\n";
    let (output, summary) = run(SAMPLE_CONFIG, src);

    assert_eq!(output, src);
    assert!(summary.is_empty());
}

#[test]
fn test_duplicate_identifiers_are_emitted_twice() {
    let config = "[db]\nhost = \"a\"\n\n[DB]\nHOST = \"b\"\n";
    let src = "package config\n\n// config vars\nvar ()\n\n// db config func\nfunc load() {}\n";
    let (output, _) = run(config, src);

    assert_eq!(output.matches("\tDB_HOST string\n").count(), 2);
    assert!(output.contains("\tDB_HOST = v.GetString(\"DB.HOST\")\n"));
    assert!(output.contains("\tDB_HOST = v.GetString(\"db.host\")\n"));
}

#[test]
fn test_empty_config() {
    let src = "package config\n\n// config vars\nvar (\n\tOLD int\n)\n";
    let (output, summary) = run("", src);

    assert_eq!(output, "package config\n\n// config vars\nvar (\n)\n");
    assert_eq!(summary.vars_blocks, 1);
}

#[test]
fn test_every_match_is_synthesized_identically() {
    let src = "package config\n\n// config vars\nvar ()\n\n// config vars\nvar (\n\tX int\n)\n";
    let (output, summary) = run("port = 80\n", src);

    assert_eq!(
        output,
        "package config\n\n// config vars\nvar (\n\tPORT int\n)\n\n// config vars\nvar (\n\tPORT int\n)\n"
    );
    assert_eq!(summary.vars_blocks, 2);
}

#[test]
fn test_method_body_and_signature() {
    let src = "package config\n\ntype Settings struct{}\n\n// settings config func\nfunc (s *Settings) Reload(force bool) error {\n\treturn nil\n}\n";
    let (output, summary) = run("name = \"svc\"\n", src);

    assert!(output.contains("func (s *Settings) Reload(force bool) error {\n\tv := viper.New()\n"));
    assert!(output.contains("\tNAME = v.GetString(\"name\")\n}\n"));
    assert!(!output.contains("return nil"));
    assert_eq!(summary.config_funcs, vec!["Reload".to_string()]);
}

#[test]
fn test_nested_group_keeps_indentation() {
    let src = "package config\n\nfunc f() {\n\t// config vars\n\tvar (\n\t\tX int\n\t)\n}\n";
    let (output, _) = run("ratio = 0.25\n", src);

    assert_eq!(
        output,
        "package config\n\nfunc f() {\n\t// config vars\n\tvar (\n\t\tRATIO float64\n\t)\n}\n"
    );
}

#[test]
fn test_composite_entry_with_marker_fails() {
    let src = "package config\n\n// config vars\nvar ()\n";
    let err = try_run("hosts = [\"a\"]\n", src, "app.toml").unwrap_err();

    assert!(matches!(err, Error::Ambiguous { ref key, .. } if key == "hosts"));
    assert!(err.to_string().contains("hosts"));
}

#[test]
fn test_composite_entry_without_marker_is_ignored() {
    let src = "package config\n\nvar X int\n";
    let (output, summary) = try_run("hosts = [\"a\"]\n", src, "app.toml").unwrap();

    assert_eq!(output, src);
    assert!(summary.is_empty());
}

#[test]
fn test_failed_generation_leaves_source_unedited() {
    let set = ConfigSet::parse("[extra]\n", Format::Toml, "app.toml").unwrap();
    let mut source =
        GoSource::parse("package config\n\n// a config func\nfunc f() {}\n", "config.go").unwrap();

    let result = Generator::new(set.entries(), LoaderPath::new("app.toml")).generate(&mut source);

    assert!(result.is_err());
    assert_eq!(source.print(), source.text());
}

#[test]
fn test_crlf_source_keeps_crlf() {
    let src = "package config\r\n\r\n// config vars\r\nvar (\r\n)\r\n\r\n// app config func\r\nfunc Load() {\r\n}\r\n";
    let expected = SAMPLE_EXPECTED
        .replace("// Unrelated is left alone.\nvar Unrelated = 1\n\n", "")
        .replace("import \"github.com/spf13/viper\"\n\n", "")
        .replace("\nfunc untouched() {\n\t// keep me\n\t_ = Unrelated\n}\n", "")
        .replace('\n', "\r\n");
    let (output, _) = run(SAMPLE_CONFIG, src);

    assert_eq!(output, expected);
}

#[test]
fn test_null_entry_with_marker_fails() {
    let set = ConfigSet::parse(r#"{"token": null}"#, Format::Json, "app.json").unwrap();
    let mut source = GoSource::parse("package config\n\n// config vars\nvar ()\n", "config.go").unwrap();

    let err = Generator::new(set.entries(), LoaderPath::new("app.json"))
        .generate(&mut source)
        .unwrap_err();

    assert!(matches!(err, Error::NullValue { ref key } if key == "token"));
    assert_eq!(source.print(), source.text());
}

#[test]
fn test_null_entry_without_marker_is_ignored() {
    let set = ConfigSet::parse(r#"{"token": null}"#, Format::Json, "app.json").unwrap();
    let src = "package config\n\nvar X int\n";
    let mut source = GoSource::parse(src, "config.go").unwrap();

    let summary = Generator::new(set.entries(), LoaderPath::new("app.json"))
        .generate(&mut source)
        .unwrap();

    assert!(summary.is_empty());
    assert_eq!(source.print(), src);
}

#[test]
fn test_toml_datetime_is_read_as_string() {
    let src = "package config\n\n// config vars\nvar ()\n\n// app config func\nfunc Load() {}\n";
    let (output, _) = run("t = 1979-05-27T07:32:00Z\n", src);

    assert!(output.contains("var (\n\tT string\n)\n"));
    assert!(output.contains("\tT = v.GetString(\"t\")\n"));
    assert!(!output.contains("toml_private"));
}
