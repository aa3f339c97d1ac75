//! Snapshot tests for Click code generation.

use clitree_codegen::{compile, compile_source};
use clitree_codegen_click::ClickTarget;
use clitree_schema::Schema;

const GREET: &str = r#"[{"name":"greet","help":"Greets","hidden":"False","params":[{"name":"\"user\"","help":"\"who\"","type":"STRING","default":"None","required":"False","prompt":"None","param_type":"option"}]}]"#;

const TESTSH: &str = r#"
- name: test
  help: Test
  hidden: "False"
  groups:
    - name: counting
      help: None
      hidden: "True"
      groups: []
      commands:
        - name: log
          help: Log at a verbosity
          hidden: "False"
          params:
            - name: verbose
              help: How loud
              type: BOOL
              default: "False"
              required: "False"
              prompt: None
              param_type: option
      params: []
  commands:
    - name: print
      help: Print
      hidden: "False"
      params: []
    - name: save-msg
      help: Save
      hidden: "False"
      params:
        - name: s
          help: Say "hi"
          type: STRING
          default: hello
          required: "True"
          prompt: Message
          param_type: option
  params:
    - name: cp
      help: None
      type: STRING
      default: None
      required: "False"
      prompt: None
      param_type: option
"#;

#[test]
fn test_single_command_body() {
    let schema = Schema::from_json_str(GREET).unwrap();
    let body = compile(&schema, &ClickTarget).unwrap();

    insta::assert_snapshot!(body.trim_end(), @r#"
    @click.command(name="greet", help="Greets", hidden=False)
    @click.option("--user", "user", help="who", default=None, required=False, prompt=None, type=click.STRING)
    @click.pass_context
    def greet(ctx, user):
        set_context_obj(ctx, {"user": user})
    "#);
}

#[test]
fn test_nested_groups_body() {
    let schema = Schema::from_yaml_str(TESTSH).unwrap();
    let body = compile(&schema, &ClickTarget).unwrap();

    insta::assert_snapshot!(body.trim_end(), @r#"
    @click.group(name="test", help="Test", hidden=False)
    @click.option("--cp", "cp", help=None, default=None, required=False, prompt=None, type=click.STRING)
    @click.pass_context
    def test(ctx, cp):
        set_context_obj(ctx, {"cp": cp})


    @test.command(name="print", help="Print", hidden=False)
    @click.pass_context
    def print(ctx):
        set_context_obj(ctx)


    @test.command(name="save-msg", help="Save", hidden=False)
    @click.option("--s", "s", help="Say \"hi\"", default="hello", required=True, prompt="Message", type=click.STRING)
    @click.pass_context
    def save_msg(ctx, s):
        set_context_obj(ctx, {"s": s})


    @test.group(name="counting", help=None, hidden=True)
    @click.pass_context
    def counting(ctx):
        set_context_obj(ctx)


    @counting.command(name="log", help="Log at a verbosity", hidden=False)
    @click.option("--verbose", "verbose", help="How loud", default=False, required=False, prompt=None, type=click.BOOL)
    @click.pass_context
    def log(ctx, verbose):
        set_context_obj(ctx, {"verbose": verbose})
    "#);
}

#[test]
fn test_option_binds_to_the_function_parameter() {
    let schema = Schema::from_json_str(
        r#"[{"name":"greet","help":"Greets","hidden":"False","params":[{"name":"DryRun","help":"None","type":"STRING","default":"None","required":"False","prompt":"None","param_type":"option"}]}]"#,
    )
    .unwrap();
    let body = compile(&schema, &ClickTarget).unwrap();

    insta::assert_snapshot!(body.trim_end(), @r#"
    @click.command(name="greet", help="Greets", hidden=False)
    @click.option("--DryRun", "dry_run", help=None, default=None, required=False, prompt=None, type=click.STRING)
    @click.pass_context
    def greet(ctx, dry_run):
        set_context_obj(ctx, {"dry_run": dry_run})
    "#);
}

#[test]
fn test_shadowing_child_gets_its_own_identifier() {
    let schema = Schema::from_yaml_str(
        r#"
- name: tool
  help: Tool
  hidden: "False"
  commands:
    - name: tool
      help: Inner
      hidden: "False"
      params: []
  groups:
    - name: remote
      help: Remote
      hidden: "False"
      commands: []
      groups: []
      params: []
  params: []
"#,
    )
    .unwrap();
    let source = compile_source(&schema, &ClickTarget, None).unwrap();
    let body = compile(&schema, &ClickTarget).unwrap();

    insta::assert_snapshot!(body.trim_end(), @r#"
    @click.group(name="tool", help="Tool", hidden=False)
    @click.pass_context
    def tool(ctx):
        set_context_obj(ctx)


    @tool.command(name="tool", help="Inner", hidden=False)
    @click.pass_context
    def tool_2(ctx):
        set_context_obj(ctx)


    @tool.group(name="remote", help="Remote", hidden=False)
    @click.pass_context
    def remote(ctx):
        set_context_obj(ctx)
    "#);
    assert!(source.ends_with("    tool()\n"));
}

#[test]
fn test_source_is_header_body_footer() {
    let schema = Schema::from_json_str(GREET).unwrap();
    let source = compile_source(&schema, &ClickTarget, None).unwrap();

    assert!(source.starts_with("import logging\n\nimport click\n"));
    assert!(source.contains("\n\n\n@click.command(name=\"greet\""));
    assert!(source.ends_with("\n\n\nif __name__ == \"__main__\":\n    greet()\n"));
}

#[test]
fn test_flags_never_include_arguments() {
    let schema = Schema::from_yaml_str(TESTSH).unwrap();
    let body = compile(&schema, &ClickTarget).unwrap();

    for line in body.lines().filter(|l| l.starts_with("@click.option(")) {
        assert!(line.starts_with("@click.option(\"--"), "{line}");
    }
    assert!(!body.contains("param_type"));
}
