use pugast::Attribute;
use transpiler::directive::{classify, parse_iteration, parse_slot};
use transpiler::{
    CompileError, Directive, Iteration, Slot, SlotKey, compile_attribute, compile_attributes,
    interpolate, strip_quotes,
};

#[test]
fn quote_stripping() {
    assert_eq!(strip_quotes("\"a\""), "a");
    assert_eq!(strip_quotes("'a b'"), "a b");
    assert_eq!(strip_quotes("\"mismatched'"), "\"mismatched'");
    assert_eq!(strip_quotes("bare"), "bare");
    assert_eq!(strip_quotes("'"), "'");
    assert_eq!(strip_quotes("''"), "");
}

#[test]
fn interpolation_requires_the_whole_node() {
    assert_eq!(interpolate("{{ var }}"), "{ var }");
    assert_eq!(interpolate("{{a}}"), "{a}");
    assert_eq!(interpolate("  {{ var }}"), "  {{ var }}");
    assert_eq!(interpolate("plain"), "plain");
    assert_eq!(interpolate("{{ a\nb }}"), "{{ a\nb }}");
    assert_eq!(interpolate("{{ a }} and {{ b }}"), "{ a }} and {{ b }");
    assert_eq!(interpolate("{{ a {{ b }}"), "{ a {{ b }");
}

#[test]
fn classifies_structural_directives() {
    let cond = Attribute::text("v-if", "'ready'");
    assert_eq!(classify(&cond), Ok(Some(Directive::Conditional("ready"))));

    let iter = Attribute::text("v-for", "\"x in xs\"");
    assert_eq!(
        classify(&iter),
        Ok(Some(Directive::Iteration(Iteration {
            capture: "x",
            iterable: "xs",
        })))
    );

    let slot = Attribute::text("v-slot:row", "'{ item }'");
    assert_eq!(
        classify(&slot),
        Ok(Some(Directive::Slot(Slot {
            key: SlotKey::Static("row"),
            args: "{ item }",
        })))
    );

    for plain in [
        Attribute::text("class", "'a'"),
        Attribute::text(":href", "'url'"),
        Attribute::text("v-model", "'m'"),
        Attribute::flag("v-else", true),
    ] {
        assert_eq!(classify(&plain), Ok(None));
    }
}

#[test]
fn iteration_grammar() {
    let parse = |v: &str| {
        let attr = Attribute::text("v-for", v);
        parse_iteration(&attr).map(|i| (i.capture.to_string(), i.iterable.to_string()))
    };
    assert_eq!(parse("item in items"), Ok(("item".into(), "items".into())));
    assert_eq!(
        parse("(item, i) in items"),
        Ok(("item, i".into(), "items".into()))
    );
    assert_eq!(
        parse("'{ id, name } in users.filter(u => u.active)'"),
        Ok(("{ id, name }".into(), "users.filter(u => u.active)".into()))
    );
    assert_eq!(parse("n in 10"), Ok(("n".into(), "10".into())));
    assert!(parse("items").is_err());
    assert!(parse(" in items").is_err());
    assert!(parse("item in ").is_err());

    let flag = Attribute::flag("v-for", true);
    assert!(matches!(
        parse_iteration(&flag),
        Err(CompileError::InvalidDirective { .. })
    ));
}

fn slot_key(name: &str) -> Result<String, CompileError> {
    let attr = Attribute::flag(name, true);
    parse_slot(&attr).map(|slot| match slot.key {
        SlotKey::Static(name) => format!("static {}", name),
        SlotKey::Dynamic(expr) => format!("dynamic {}", expr),
    })
}

#[test]
fn slot_keys() {
    assert_eq!(slot_key("v-slot"), Ok("static default".to_string()));
    assert_eq!(slot_key("v-slot:header"), Ok("static header".to_string()));
    assert_eq!(slot_key("v-slot:[dyn]"), Ok("dynamic dyn".to_string()));
    assert!(slot_key("v-slot:").is_err());
}

#[test]
fn single_attribute_formatting() {
    let one = |a: Attribute| compile_attribute(&a).expect("compile failed");
    assert_eq!(one(Attribute::flag("checked", true)), "checked");
    assert_eq!(one(Attribute::flag("checked", false)), "checked={false}");
    assert_eq!(one(Attribute::text("href", "'/home'")), "href=\"/home\"");
    assert_eq!(one(Attribute::text("@click.prevent", "'go'")), "onclick.prevent={go}");
    assert_eq!(one(Attribute::text(":key", "\"item.id\"")), "key={item.id}");
}

#[test]
fn attribute_list_ordering() {
    let attrs = vec![
        Attribute::text("class", "'x'"),
        Attribute::text("@click", "'go'"),
        Attribute::text("style", "'color: red'"),
        Attribute::text("class", "'y'"),
        Attribute::text("class", "'z'"),
    ];
    assert_eq!(
        compile_attributes(&attrs),
        Ok("onclick={go} class=\"x y z\" style=\"color: red\"".to_string())
    );
    assert_eq!(compile_attributes(Vec::<Attribute>::new().iter()), Ok(String::new()));
}
