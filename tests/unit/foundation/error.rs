use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        RenderError::invalid_arguments("x")
            .to_string()
            .contains("invalid arguments:")
    );
    assert!(
        RenderError::out_of_memory("x")
            .to_string()
            .contains("out of memory:")
    );
    assert!(
        RenderError::unknown("x")
            .to_string()
            .contains("unknown error:")
    );
}

#[test]
fn codes_follow_variants() {
    assert_eq!(
        RenderError::invalid_arguments("x").code(),
        ErrorCode::InvalidArguments
    );
    assert_eq!(RenderError::out_of_memory("x").code(), ErrorCode::OutOfMemory);
    assert_eq!(RenderError::unknown("x").code(), ErrorCode::Unknown);

    let ok: RenderResult<()> = Ok(());
    assert_eq!(ErrorCode::of(&ok), ErrorCode::Ok);
    let err: RenderResult<()> = Err(RenderError::unknown("boom"));
    assert_eq!(ErrorCode::of(&err), ErrorCode::Unknown);
}

#[test]
fn into_unknown_keeps_message() {
    let err = RenderError::out_of_memory("pixmap").into_unknown();
    assert_eq!(err.code(), ErrorCode::Unknown);
    assert!(err.to_string().contains("out of memory: pixmap"));

    let err = RenderError::unknown("parse").into_unknown();
    assert_eq!(err.to_string(), "unknown error: parse");
}
