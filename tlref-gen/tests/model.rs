use tlref_gen::{
    Config, DisplayNames, Enrichment, ExampleRegistry, Model, NameCache, Synthesizer, TypeGraph,
};
use tlref_parser::load_schema;
use tlref_parser::tl::Kind;

const SCHEMA: &str = "\
// LAYER 158
inputPeerSelf#7da07ec9 = InputPeer;
inputPeerUser#dde8a54c user_id:long access_hash:long = InputPeer;
inputPeerChat#35a95cb9 chat_id:long = InputPeer;
message#94345242 id:int message:string = Message;
messageEmpty#90a6ca84 flags:# id:int peer_id:flags.0?Peer = Message;
photo#fb197a65 id:long = PhotoInfo;
---functions---
messages.getHistory#4423e6c5 peer:InputPeer offset_id:int limit:int = messages.Messages;
messages.getHistoryEx#4423e6c6 flags:# peer:InputPeer offset_id:int limit:int silent:flags.0?true = messages.Messages;
";

fn build(registry: &ExampleRegistry, config: &Config) -> Model {
    Model::build(&load_schema(SCHEMA), None, registry, config)
}

fn example(model: &Model, kind: Kind, name: &str) -> String {
    model.find(kind, name).unwrap().example.clone()
}

// ─── Collision resolution ─────────────────────────────────────────────────────

#[test]
fn colliding_constructor_gets_suffix() {
    let model = build(&ExampleRegistry::empty(), &Config::default());
    assert_eq!(model.find(Kind::Constructor, "message").unwrap().display_name, "MessageObj");
    assert_eq!(model.find(Kind::Constructor, "message").unwrap().mangled_name, "Message");
    assert_eq!(model.find(Kind::Constructor, "photo").unwrap().display_name, "Photo");
    assert!(example(&model, Kind::Constructor, "message").contains("obj := &tg.MessageObj{"));
}

// ─── Parameter form ───────────────────────────────────────────────────────────

#[test]
fn short_call_is_positional() {
    let model = build(&ExampleRegistry::empty(), &Config::default());
    assert_eq!(
        example(&model, Kind::Method, "messages.getHistory"),
        "// MessagesGetHistory - positional arguments\n\
         result, err := client.MessagesGetHistory(&tg.InputPeer{}, 42, 42)\n\
         if err != nil {\n    // handle error\n}\n\
         // result is *tg.MessagesMessages"
    );
}

#[test]
fn optional_field_forces_params_struct() {
    let model = build(&ExampleRegistry::empty(), &Config::default());
    let ex = example(&model, Kind::Method, "messages.getHistoryEx");
    assert!(ex.starts_with("// MessagesGetHistoryEx - using Params struct\n"), "{ex}");
    assert!(ex.contains("client.MessagesGetHistoryEx(&tg.MessagesGetHistoryExParams{"));
    assert!(ex.contains("    Peer: &tg.InputPeer{},\n    OffsetId: 42,\n    Limit: 42,\n"));
    assert!(ex.contains("    // Optional fields:\n    // Silent: true,"));
    // The `flags:#` header never shows up
    assert!(!ex.contains("Flags"));
}

#[test]
fn truncates_long_field_lists() {
    let req: Vec<String> = (0..8).map(|i| format!("r{i}:int")).collect();
    let opt: Vec<String> = (0..5).map(|i| format!("o{i}:flags.{i}?int")).collect();
    let line = format!("big#1 flags:# {} {} = Big;", req.join(" "), opt.join(" "));
    let schema = load_schema(&line);
    let model = Model::build(&schema, None, &ExampleRegistry::empty(), &Config::default());

    let ex = example(&model, Kind::Constructor, "big");
    assert!(ex.contains("    R5: 42,\n    // ... more required fields\n"), "{ex}");
    assert!(!ex.contains("R6:"));
    assert!(ex.contains("    // O3: 42,\n    // ... more optional fields"), "{ex}");
    assert!(!ex.contains("O4:"));
}

/// Example for a method `name` taking `count` required `int` fields
/// named `{prefix}0`, `{prefix}1`, ...
fn method_with_ints(name: &str, prefix: &str, count: usize) -> String {
    let fields: Vec<String> = (0..count).map(|i| format!("{prefix}{i}:int")).collect();
    let schema = load_schema(&format!("---functions---\n{name}#1 {} = Result;", fields.join(" ")));
    let model = Model::build(&schema, None, &ExampleRegistry::empty(), &Config::default());
    example(&model, Kind::Method, name)
}

#[test]
fn five_required_is_positional() {
    assert_eq!(
        method_with_ints("five", "a", 5),
        "// Five - positional arguments\n\
         result, err := client.Five(42, 42, 42, 42, 42)\n\
         if err != nil {\n    // handle error\n}\n\
         // result is *tg.Result"
    );
}

#[test]
fn six_required_uses_params_struct() {
    assert_eq!(
        method_with_ints("six", "a", 6),
        "// Six - using Params struct\n\
         result, err := client.Six(&tg.SixParams{\n\
         \x20   A0: 42,\n    A1: 42,\n    A2: 42,\n    A3: 42,\n    A4: 42,\n    A5: 42,\n\
         })\n\
         if err != nil {\n    // handle error\n}\n\
         // result is *tg.Result"
    );
}

#[test]
fn method_required_fields_truncate_at_eight() {
    assert_eq!(
        method_with_ints("nine", "b", 9),
        "// Nine - using Params struct\n\
         result, err := client.Nine(&tg.NineParams{\n\
         \x20   B0: 42,\n    B1: 42,\n    B2: 42,\n    B3: 42,\n\
         \x20   B4: 42,\n    B5: 42,\n    B6: 42,\n    B7: 42,\n\
         \x20   // ...\n\
         })\n\
         if err != nil {\n    // handle error\n}\n\
         // result is *tg.Result"
    );
}

#[test]
fn constructor_without_fields() {
    let model = build(&ExampleRegistry::empty(), &Config::default());
    assert_eq!(
        example(&model, Kind::Constructor, "inputPeerSelf"),
        "// Creating InputPeerSelf constructor\nobj := &tg.InputPeerSelf{}"
    );
}

// ─── Registry ─────────────────────────────────────────────────────────────────

#[test]
fn registry_implementation_is_expanded() {
    let registry = ExampleRegistry::empty()
        .with_implementation("InputPeer", "inputPeerUser")
        .with_field_value("inputPeerUser", "user_id", "int64(777000)");
    let model = build(&registry, &Config::default());
    assert!(
        example(&model, Kind::Method, "messages.getHistory").contains(
            "client.MessagesGetHistory(&tg.InputPeerUser{UserId: int64(777000), AccessHash: int64(1234567890)}, 42, 42)"
        )
    );
}

#[test]
fn registry_entry_missing_from_schema_is_a_placeholder() {
    let registry = ExampleRegistry::empty().with_implementation("InputPeer", "inputPeerEmpty");
    let model = build(&registry, &Config::default());
    assert!(example(&model, Kind::Method, "messages.getHistory").contains("(&tg.InputPeerEmpty{}, 42, 42)"));
}

#[test]
fn expansion_stops_at_configured_depth() {
    let registry = ExampleRegistry::empty().with_implementation("InputPeer", "inputPeerUser");
    let config = Config { expand_depth: 0, ..Config::default() };
    let model = build(&registry, &config);
    assert!(example(&model, Kind::Method, "messages.getHistory").contains("(&tg.InputPeerUser{}, 42, 42)"));
}

#[test]
fn example_values() {
    let schema = load_schema(SCHEMA);
    let names = NameCache::new();
    let graph = TypeGraph::build(&schema.constructors);
    let display = DisplayNames::new(&graph, &names);
    let registry = ExampleRegistry::empty().with_implementation("Message", "message");
    let config = Config::default();
    let synth = Synthesizer::new(&graph, &registry, &display, &names, &config);

    assert_eq!(synth.example_value("string", true), "\"Hello, World!\"");
    assert_eq!(synth.example_value("int", true), "42");
    assert_eq!(synth.example_value("long", true), "int64(1234567890)");
    assert_eq!(synth.example_value("double", true), "3.14159");
    assert_eq!(synth.example_value("bytes", true), "[]byte{0x01, 0x02, 0x03}");
    assert_eq!(synth.example_value("flags.2?true", true), "true");
    assert_eq!(synth.example_value("Vector<long>", true), "[]int64{}");
    assert_eq!(synth.example_value("Vector<Peer>", true), "[]tg.Peer{&tg.Peer{}}");
    assert_eq!(
        synth.example_value("Message", true),
        "&tg.MessageObj{Id: 42, Message: \"Hello, World!\"}"
    );
    assert_eq!(synth.example_value("Message", false), "&tg.MessageObj{}");
}

// ─── Round trip ───────────────────────────────────────────────────────────────

#[test]
fn examples_only_mention_displayable_fields() {
    let model = build(&ExampleRegistry::curated(), &Config::default());
    for doc in model.constructors.iter().chain(&model.methods) {
        let known: Vec<&str> = doc.fields.iter().map(|f| f.mangled_name.as_str()).collect();
        for line in doc.example.lines().filter(|l| l.starts_with("    ")) {
            let line = line.trim_start();
            let line = line.strip_prefix("// ").unwrap_or(line);
            if let Some((name, _)) = line.split_once(": ") {
                assert!(known.contains(&name), "{}: `{name}` not a field", doc.name);
            }
        }
    }
}

// ─── Types ────────────────────────────────────────────────────────────────────

#[test]
fn types_are_sorted_with_previews() {
    let config = Config { interface_preview: 2, ..Config::default() };
    let model = build(&ExampleRegistry::empty(), &config);
    let names: Vec<&str> = model.types.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["InputPeer", "Message", "PhotoInfo"]);
    assert!(model.is_type("Message"));
    assert!(!model.is_type("messages.Messages"));

    let input_peer = &model.types[0];
    assert_eq!(input_peer.constructors, ["inputPeerSelf", "inputPeerUser", "inputPeerChat"]);
    assert!(input_peer.example.contains("var _ tg.InputPeer = &tg.InputPeerSelf{}\n"));
    assert!(input_peer.example.contains("var _ tg.InputPeer = &tg.InputPeerUser{}\n"));
    assert!(!input_peer.example.contains("InputPeerChat"));
    assert!(input_peer.example.ends_with("// ... and 1 more constructors\n"));
}

#[test]
fn metadata_and_layer() {
    let model = build(&ExampleRegistry::empty(), &Config::default());
    assert_eq!(model.layer, Some(158));
    assert_eq!(model.metadata.total_constructors, 6);
    assert_eq!(model.metadata.total_methods, 2);
    assert_eq!(model.metadata.total_types, 3);
    assert_eq!(model.metadata.enriched, 0);

    let empty = model.find(Kind::Constructor, "messageEmpty").unwrap();
    assert_eq!(empty.fields.len(), 2);
    assert_eq!(empty.fields[1].flag_index, Some(0));
    assert!(empty.fields[1].optional);
    assert_eq!(empty.fields[1].ty, "Peer");
    assert_eq!(empty.fields[1].raw_type, "flags.0?Peer");
}

#[test]
fn sequential_and_parallel_agree() {
    let registry = ExampleRegistry::curated();
    let a = build(&registry, &Config { parallel: false, ..Config::default() });
    let b = build(&registry, &Config::default());
    assert_eq!(a.constructors, b.constructors);
    assert_eq!(a.methods, b.methods);
    assert_eq!(a.types, b.types);
}

// ─── Enrichment ───────────────────────────────────────────────────────────────

#[test]
fn enrichment_adds_text_but_not_fields() {
    let enrichment = Enrichment::from_json(
        r#"{"methods": [{
            "name": "messages.getHistory",
            "description": "Returns the conversation history with one interlocutor / within a chat",
            "fields": [
                {"name": "peer", "type": "InputPeer", "description": "Target peer"},
                {"name": "hash", "type": "long", "description": "Result hash"}
            ],
            "result_type": "messages.Messages",
            "errors": [{"code": "400", "type": "PEER_ID_INVALID", "description": "The provided peer id is invalid."}],
            "can_be_used_by": ["users"]
        }]}"#,
    )
    .unwrap();
    let model = Model::build(
        &load_schema(SCHEMA),
        Some(&enrichment),
        &ExampleRegistry::empty(),
        &Config::default(),
    );

    let doc = model.find(Kind::Method, "messages.getHistory").unwrap();
    assert!(doc.description.starts_with("Returns the conversation history"));
    let fields: Vec<&str> = doc.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(fields, ["peer", "offset_id", "limit"]);
    assert_eq!(doc.fields[0].description, "Target peer");
    assert_eq!(doc.fields[1].description, "");
    assert_eq!(doc.errors[0].ty, "PEER_ID_INVALID");
    assert_eq!(doc.can_be_used_by, ["users"]);
    assert_eq!(model.metadata.enriched, 1);

    // Entities without a record fall back to the schema alone
    let other = model.find(Kind::Method, "messages.getHistoryEx").unwrap();
    assert!(other.description.is_empty() && other.errors.is_empty());
}

// ─── Persistence ──────────────────────────────────────────────────────────────

#[test]
fn save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");
    let model = build(&ExampleRegistry::curated(), &Config::default());
    model.save(&path).unwrap();
    assert_eq!(Model::load(&path).unwrap(), model);
}

#[test]
fn load_errors_name_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    let err = Model::load(&missing).unwrap_err();
    assert_eq!(err.path(), missing.as_path());
    assert!(err.to_string().contains("nope.json"));

    let bad = dir.path().join("bad.json");
    std::fs::write(&bad, "{").unwrap();
    let err = Model::load(&bad).unwrap_err();
    assert!(err.to_string().contains("invalid JSON"), "{err}");
}
