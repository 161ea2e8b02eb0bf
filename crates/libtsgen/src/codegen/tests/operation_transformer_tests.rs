use crate::codegen::OperationTransformer;
use crate::codegen::tests::test_utils;

#[test]
fn operation_with_argument_and_nested_selection() {
    let schema = test_utils::schema_from_sdl("
        type Query { getUser(id: ID!): User }
        type User {
          id: ID!
          profile: Profile
        }
        type Profile { bio: String }
    ");
    let query_type = schema.query_type().expect("no query type");

    assert_eq!(
        OperationTransformer::new(&schema).transform(query_type, "query"),
        "query GetUser(id: ID!) {\n\
        \x20 getUser(id: $id) {\n\
        \x20   id\n\
        \x20   profile {\n\
        \x20     bio\n\
        \x20   }\n\
        \x20 }\n\
        }\n\n",
    );
}

#[test]
fn argument_free_field_omits_parentheses_entirely() {
    let schema = test_utils::schema_from_sdl("type Query { ping: String }");
    let query_type = schema.query_type().expect("no query type");

    assert_eq!(
        OperationTransformer::new(&schema).transform(query_type, "query"),
        "query Ping {\n\
        \x20 ping\n\
        }\n\n",
    );
}

#[test]
fn union_fields_expand_to_inline_fragments_in_member_order() {
    let schema = test_utils::schema_from_sdl("
        type Query { results: ResultPage }
        type ResultPage { search: SearchResult }
        union SearchResult = Cat | Dog
        type Cat { name: String }
        type Dog { bark: Boolean }
    ");
    let query_type = schema.query_type().expect("no query type");

    assert_eq!(
        OperationTransformer::new(&schema).transform(query_type, "query"),
        "query Results {\n\
        \x20 results {\n\
        \x20   search\n\
        \x20   ... on Cat {\n\
        \x20     name\n\
        \x20   }\n\
        \x20   ... on Dog {\n\
        \x20     bark\n\
        \x20   }\n\
        \x20 }\n\
        }\n\n",
    );
}

#[test]
fn direct_self_reference_terminates_with_one_leaf_level() {
    let schema = test_utils::schema_from_sdl("
        type Query { me: User }
        type User {
          id: ID!
          bestFriend: User
        }
    ");
    let query_type = schema.query_type().expect("no query type");

    assert_eq!(
        OperationTransformer::new(&schema).transform(query_type, "query"),
        "query Me {\n\
        \x20 me {\n\
        \x20   id\n\
        \x20   bestFriend {\n\
        \x20     id\n\
        \x20   }\n\
        \x20 }\n\
        }\n\n",
    );
}

#[test]
fn indirect_cycles_terminate_too() {
    let schema = test_utils::schema_from_sdl("
        type Query { post: Post }
        type Post {
          title: String
          author: Author
        }
        type Author {
          name: String
          latestPost: Post
        }
    ");
    let query_type = schema.query_type().expect("no query type");

    assert_eq!(
        OperationTransformer::new(&schema).transform(query_type, "query"),
        "query Post {\n\
        \x20 post {\n\
        \x20   title\n\
        \x20   author {\n\
        \x20     name\n\
        \x20     latestPost {\n\
        \x20       title\n\
        \x20     }\n\
        \x20   }\n\
        \x20 }\n\
        }\n\n",
    );
}

#[test]
fn repeated_result_types_reuse_memoized_selection_text() {
    let schema = test_utils::schema_from_sdl("
        type Query {
          a: User
          b: User
        }
        type User { id: ID! }
    ");
    let query_type = schema.query_type().expect("no query type");

    assert_eq!(
        OperationTransformer::new(&schema).transform(query_type, "query"),
        "query A {\n\
        \x20 a {\n\
        \x20   id\n\
        \x20 }\n\
        }\n\n\
        query B {\n\
        \x20 b {\n\
        \x20   id\n\
        \x20 }\n\
        }\n\n",
    );
}

#[test]
fn mutation_keyword_and_variable_bindings() {
    let schema = test_utils::schema_from_sdl("
        type Query { ping: String }
        type Mutation { createUser(name: String!, age: Int): User }
        type User { id: ID! }
    ");
    let mutation_type = schema.mutation_type().expect("no mutation type");

    assert_eq!(
        OperationTransformer::new(&schema).transform(mutation_type, "mutation"),
        "mutation CreateUser(name: String!, age: Int) {\n\
        \x20 createUser(name: $name, age: $age) {\n\
        \x20   id\n\
        \x20 }\n\
        }\n\n",
    );
}

#[test]
fn fresh_transformers_render_identically() {
    let schema = test_utils::schema_from_sdl("
        type Query { me: User }
        type User {
          id: ID!
          friends: [User!]
        }
    ");
    let query_type = schema.query_type().expect("no query type");

    let first = OperationTransformer::new(&schema).transform(query_type, "query");
    let second = OperationTransformer::new(&schema).transform(query_type, "query");
    assert_eq!(first, second);
}
