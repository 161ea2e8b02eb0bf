use crate::ast;
use crate::types::TypeExpr;

fn field_type_expr(sdl_field_type: &str) -> TypeExpr {
    let doc = ast::schema::parse(
        format!("type T {{ f: {sdl_field_type} }}").as_str(),
    ).expect("parse error");

    for def in doc.definitions {
        if let ast::schema::Definition::TypeDefinition(
            ast::schema::TypeDefinition::Object(obj_def)
        ) = def {
            return TypeExpr::from_ast_type(&obj_def.fields[0].field_type);
        }
    }
    panic!("no object type def found");
}

#[test]
fn innermost_name_strips_all_wrapper_layers() {
    assert_eq!(field_type_expr("User").innermost_name(), "User");
    assert_eq!(field_type_expr("User!").innermost_name(), "User");
    assert_eq!(field_type_expr("[User!]!").innermost_name(), "User");
    assert_eq!(field_type_expr("[[User]!]").innermost_name(), "User");
}

#[test]
fn display_round_trips_graphql_syntax() {
    for type_text in ["Int", "ID!", "[User!]!", "[[User]!]"] {
        assert_eq!(field_type_expr(type_text).to_string(), type_text);
    }
}

#[test]
fn is_non_null_inspects_only_the_outermost_layer() {
    assert!(field_type_expr("User!").is_non_null());
    assert!(field_type_expr("[User!]!").is_non_null());
    assert!(!field_type_expr("User").is_non_null());
    assert!(!field_type_expr("[User!]").is_non_null());
}

#[test]
fn wrapper_nesting_is_structural() {
    let expr = field_type_expr("[User!]!");
    let TypeExpr::NonNull(list) = expr else {
        panic!("expected outer non-null");
    };
    let TypeExpr::List(inner) = *list else {
        panic!("expected list under non-null");
    };
    assert_eq!(
        *inner,
        TypeExpr::NonNull(Box::new(TypeExpr::Named("User".to_string()))),
    );
}
