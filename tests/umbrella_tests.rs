//! End-to-end checks through the umbrella crate's prelude

use arshowcase::prelude::*;

#[test]
fn test_resolve_add_and_classify() -> anyhow::Result<()> {
    let resolver = ModelSourceResolver::default();
    let mut library = ModelLibrary::new();

    let first = resolver.resolve_address("https://example.com/a.glb")?;
    let a = library.add_from(first.url, &first.name, first.source);
    assert_eq!(ViewerMode::of(&library), ViewerMode::SingleViewer);

    let upload = resolver.resolve_file("b.gltf", b"{\"asset\":{}}".to_vec(), &mut library)?;
    let b = library.add_from(upload.url, &upload.name, upload.source);
    assert_eq!(ViewerMode::of(&library), ViewerMode::LibraryViewer);
    assert_eq!(library.active_id(), Some(b));

    library.remove(b);
    assert_eq!(library.active_id(), Some(a));
    assert_eq!(library.handles().live_count(), 0);
    assert_eq!(ViewerMode::of(&library), ViewerMode::SingleViewer);
    Ok(())
}

#[test]
fn test_source_errors_are_typed() {
    let resolver = ModelSourceResolver::default();
    let mut library = ModelLibrary::new();

    let err = resolver.resolve_file("model.txt", Vec::new(), &mut library).unwrap_err();
    assert!(err.is_source_error());
    assert!(matches!(err, Error::UnsupportedFormat(_)));

    let err = resolver.resolve_address("not a url").unwrap_err();
    assert!(matches!(err, Error::InvalidAddress(_)));
}
