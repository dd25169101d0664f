//! End-to-end coverage of the six binding scenarios and boundary cases,
//! driving the full fetch → source-map → parse → classify → resolve chain
//! through mocked HTTP.

use hookres::config::HeadlessEnvironment;
use hookres::model::{HookObservation, HookSource};
use hookres::{resolve, Config};
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a source-map `mappings` string mapping generated lines `0..lines`
/// directly onto original lines `0..lines`, column 0, single source file.
fn identity_mappings(lines: usize) -> String {
    let mut out = String::from("AAAA");
    for _ in 1..lines {
        out.push_str(";AACA");
    }
    out
}

async fn mount_bundle_and_map(server: &MockServer, bundle_path: &str, map_path: &str, original_source: &str) -> String {
    let bundle_url = format!("{}{}", server.uri(), bundle_path);
    let map_url = format!("{}{}", server.uri(), map_path);

    let line_count = original_source.lines().count().max(1);
    let mut bundle_body = "var _placeholder;\n".repeat(line_count);
    bundle_body.push_str(&format!("//# sourceMappingURL={map_path}\n"));

    Mock::given(method("GET"))
        .and(path(bundle_path))
        .respond_with(ResponseTemplate::new(200).set_body_string(bundle_body))
        .mount(server)
        .await;

    let map_json = serde_json::json!({
        "version": 3,
        "file": "app.js",
        "sources": ["app.tsx"],
        "sourcesContent": [original_source],
        "names": [],
        "mappings": identity_mappings(line_count),
    });

    Mock::given(method("GET"))
        .and(path(map_path))
        .respond_with(ResponseTemplate::new(200).set_body_string(map_json.to_string()))
        .mount(server)
        .await;

    let _ = map_url;
    bundle_url
}

fn hook(id: Option<u32>, name: &str, file: &str, line: u32) -> HookObservation {
    HookObservation {
        id,
        name: name.to_string(),
        value: Value::Null,
        sub_hooks: vec![],
        hook_source: Some(HookSource {
            file_name: Some(file.to_string()),
            line_number: Some(line),
            column_number: Some(0),
            function_name: None,
        }),
    }
}

fn test_env() -> (reqwest::Client, HeadlessEnvironment, Config, CancellationToken) {
    (
        reqwest::Client::new(),
        HeadlessEnvironment,
        Config::default(),
        CancellationToken::new(),
    )
}

#[tokio::test]
async fn destructured_state_resolves_to_count() {
    let server = MockServer::start().await;
    let source = "const [count, setCount] = React.useState(1);\n";
    let bundle_url = mount_bundle_and_map(&server, "/a1.js", "/a1.js.map", source).await;

    let h = hook(Some(1), "State", &bundle_url, 1);
    let (client, env, config, cancel) = test_env();
    let result = resolve(&[h], &client, &env, &config, &cancel).await;
    assert_eq!(result[0].hook_variable_name.as_deref(), Some("count"));
}

#[tokio::test]
async fn indirect_aliasing_resolves_to_count() {
    let server = MockServer::start().await;
    let source = "const countState = React.useState(1);\nconst [count, setCount] = countState;\n";
    let bundle_url = mount_bundle_and_map(&server, "/a2.js", "/a2.js.map", source).await;

    let h = hook(Some(1), "State", &bundle_url, 1);
    let (client, env, config, cancel) = test_env();
    let result = resolve(&[h], &client, &env, &config, &cancel).await;
    assert_eq!(result[0].hook_variable_name.as_deref(), Some("count"));
}

#[tokio::test]
async fn indexed_member_access_selects_index_zero() {
    let server = MockServer::start().await;
    let source = "const countState = useState(1);\nconst count = countState[0];\nconst setCount = countState[1];\n";
    let bundle_url = mount_bundle_and_map(&server, "/a3.js", "/a3.js.map", source).await;

    let h = hook(Some(1), "State", &bundle_url, 1);
    let (client, env, config, cancel) = test_env();
    let result = resolve(&[h], &client, &env, &config, &cancel).await;
    assert_eq!(result[0].hook_variable_name.as_deref(), Some("count"));
}

#[tokio::test]
async fn ambiguous_aliasing_falls_back_to_alias_name() {
    let server = MockServer::start().await;
    let source = "const countState = React.useState(1);\n\
                  const [count, setCount] = countState;\n\
                  const [anotherCount, setAnotherCount] = countState;\n";
    let bundle_url = mount_bundle_and_map(&server, "/a4.js", "/a4.js.map", source).await;

    let h = hook(Some(1), "State", &bundle_url, 1);
    let (client, env, config, cancel) = test_env();
    let result = resolve(&[h], &client, &env, &config, &cancel).await;
    assert_eq!(result[0].hook_variable_name.as_deref(), Some("countState"));
}

#[tokio::test]
async fn non_declarative_primitive_passes_through_unnamed() {
    let server = MockServer::start().await;
    let source = "const unrelated = 1;\nuseEffect(() => {});\n";
    let bundle_url = mount_bundle_and_map(&server, "/a5.js", "/a5.js.map", source).await;

    let h = hook(Some(1), "Effect", &bundle_url, 2);
    let (client, env, config, cancel) = test_env();
    let result = resolve(&[h], &client, &env, &config, &cancel).await;
    assert_eq!(result[0].hook_variable_name, None);
}

#[tokio::test]
async fn custom_hook_array_destructure_is_ambiguous_but_children_still_resolve() {
    let server = MockServer::start().await;
    let source = "const [customFlag, customRef] = useCustomHook();\n\
                  const [count, setCount] = React.useState(1);\n";
    let bundle_url = mount_bundle_and_map(&server, "/a6.js", "/a6.js.map", source).await;

    let mut custom = hook(None, "useCustomHook", &bundle_url, 1);
    custom.sub_hooks = vec![hook(Some(2), "State", &bundle_url, 2)];

    let (client, env, config, cancel) = test_env();
    let result = resolve(&[custom], &client, &env, &config, &cancel).await;

    assert_eq!(result[0].hook_variable_name, None);
    assert_eq!(result[0].sub_hooks[0].hook_variable_name.as_deref(), Some("count"));
}

#[tokio::test]
async fn empty_hook_log_returns_empty() {
    let (client, env, config, cancel) = test_env();
    let result = resolve(&[], &client, &env, &config, &cancel).await;
    assert!(result.is_empty());
}

#[tokio::test]
async fn null_file_name_passes_through_unchanged() {
    let mut h = hook(Some(1), "State", "unused", 1);
    h.hook_source = None;

    let (client, env, config, cancel) = test_env();
    let result = resolve(&[h.clone()], &client, &env, &config, &cancel).await;
    assert_eq!(result[0].hook_variable_name, None);
    assert_eq!(result[0].structure(), h.structure());
}

#[tokio::test]
async fn parse_error_only_taints_its_own_file() {
    let server = MockServer::start().await;
    let broken_source = "const [count, setCount] = React.useState(1<<<<broken;\n";
    let good_source = "const [flag, setFlag] = React.useState(false);\n";

    let broken_url = mount_bundle_and_map(&server, "/broken.js", "/broken.js.map", broken_source).await;
    let good_url = mount_bundle_and_map(&server, "/good.js", "/good.js.map", good_source).await;

    let broken_hook = hook(Some(1), "State", &broken_url, 1);
    let good_hook = hook(Some(2), "State", &good_url, 1);

    let (client, env, config, cancel) = test_env();
    let result = resolve(&[broken_hook, good_hook], &client, &env, &config, &cancel).await;

    // The malformed file's tree-sitter parse still succeeds (error nodes),
    // so this exercises classification resilience rather than a hard parse
    // failure; the well-formed file must resolve regardless.
    assert_eq!(result[1].hook_variable_name.as_deref(), Some("flag"));
}

#[tokio::test]
async fn resolution_is_stable_across_repeated_calls() {
    let server = MockServer::start().await;
    let source = "const [count, setCount] = React.useState(1);\n";
    let bundle_url = mount_bundle_and_map(&server, "/stable.js", "/stable.js.map", source).await;

    let h = hook(Some(1), "State", &bundle_url, 1);
    let (client, env, config, cancel) = test_env();

    let first = resolve(&[h.clone()], &client, &env, &config, &cancel).await;
    let second = resolve(&[h], &client, &env, &config, &cancel).await;

    assert_eq!(first[0].hook_variable_name, second[0].hook_variable_name);
    assert_eq!(first[0].hook_variable_name.as_deref(), Some("count"));
}
