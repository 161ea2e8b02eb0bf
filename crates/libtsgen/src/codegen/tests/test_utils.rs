use crate::schema::Schema;

pub(crate) fn schema_from_sdl(sdl: &str) -> Schema {
    let mut builder = Schema::builder();
    builder.load_content(None, sdl).expect("schema load error");
    builder.build().expect("schema build error")
}
