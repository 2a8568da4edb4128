use insta::assert_debug_snapshot;
use markup_index_config::IndexConfig;
use markup_index_engine::{
    Book, BookIndex, Chapter, ChapterIndex, IndexBuilder, IndexError, IndexKind, InlineCompiler,
    Location, numbering::PREFIX_SEPARATOR, tokenize,
};
use pretty_assertions::assert_eq;
use relative_path::RelativePath;

/// Structural elements in the order a compiler would report them.
enum Node<'a> {
    Heading(usize, &'a str),
    Nonum(usize, &'a str),
    List(&'a str),
    ListNum(&'a str),
    Table(&'a str),
    Image(&'a str),
    Equation,
    Footnote(&'a str),
    Column(&'a str),
    Note,
}

/// Compiler stand-in that leaves inline markup untouched.
struct Verbatim;

impl InlineCompiler for Verbatim {
    fn compile_inline(&self, text: &str) -> String {
        text.to_string()
    }
}

fn walk(builder: &mut IndexBuilder<'_>, nodes: &[Node<'_>]) -> Result<(), IndexError> {
    for (line, node) in nodes.iter().enumerate() {
        builder.set_line(line + 1)?;
        match *node {
            Node::Heading(level, caption) => {
                builder.headline(level, None, caption)?;
            }
            Node::Nonum(level, caption) => builder.nonum_begin(level, None, caption)?,
            Node::List(id) => {
                builder.list(id, None)?;
            }
            Node::ListNum(id) => {
                builder.listnum(id, None)?;
            }
            Node::Table(id) => {
                builder.table(Some(id), None)?;
            }
            Node::Image(id) => {
                builder.image(id, None)?;
            }
            Node::Equation => {
                builder.texequation(None, None)?;
            }
            Node::Footnote(id) => {
                builder.footnote(id, "")?;
            }
            Node::Column(id) => {
                builder.column_begin(3, Some(id), None)?;
                builder.column_end(3)?;
            }
            Node::Note => builder.caption_block_by_name("note", None)?,
        }
    }
    Ok(())
}

fn numbers(index: &ChapterIndex) -> Vec<(IndexKind, usize)> {
    IndexKind::ALL
        .iter()
        .map(|&kind| (kind, index.len(kind)))
        .filter(|(_, len)| *len > 0)
        .collect()
}

#[test]
fn interleaved_stores_keep_their_own_sequences() {
    let mut builder = IndexBuilder::new(false);
    builder.bind(&Verbatim, None, Location::new("ch01.re", 1));

    walk(
        &mut builder,
        &[
            Node::Image("a"),
            Node::Table("t1"),
            Node::Image("b"),
            Node::List("l1"),
            Node::Table("t2"),
            Node::Equation,
            Node::Image("c"),
            Node::ListNum("l2"),
        ],
    )
    .unwrap();

    let index = builder.into_index().unwrap();
    let image_numbers: Vec<usize> = index.images.iter().map(|e| e.number).collect();
    let table_numbers: Vec<usize> = index.tables.iter().map(|e| e.number).collect();
    let list_ids: Vec<(Option<&str>, usize)> = index
        .lists
        .iter()
        .map(|e| (e.id.as_deref(), e.number))
        .collect();

    assert_eq!(image_numbers, vec![1, 2, 3]);
    assert_eq!(table_numbers, vec![1, 2]);
    assert_eq!(list_ids, vec![(Some("l1"), 1), (Some("l2"), 2)]);
    assert_eq!(index.equations.len(), 1);
}

#[test]
fn heading_anchors_follow_the_outline() {
    let mut builder = IndexBuilder::new(false);
    builder.bind(&Verbatim, None, Location::new("ch01.re", 1));

    walk(
        &mut builder,
        &[
            Node::Heading(1, "A"),
            Node::Heading(2, "A.1"),
            Node::Nonum(2, "unnumbered"),
            Node::Heading(2, "A.2"),
            Node::Heading(1, "B"),
            Node::Heading(2, "B.1"),
            Node::Heading(3, "B.1.1"),
        ],
    )
    .unwrap();

    let index = builder.index().unwrap();
    let anchors: Vec<&str> = index
        .headings
        .iter()
        .map(|h| h.detail.anchor.as_str())
        .collect();
    assert_eq!(anchors, vec!["1", "1.1", "1.2", "2", "2.1", "2.1.1"]);

    let captions: Vec<String> = index
        .headings
        .iter()
        .map(|h| h.caption.as_deref().unwrap_or_default().replace(PREFIX_SEPARATOR, " "))
        .collect();
    assert_debug_snapshot!(captions, @r#"
    [
        "1 A",
        "1.1 A.1",
        "1.2 A.2",
        "2 B",
        "2.1 B.1",
        "B.1.1",
    ]
    "#);
}

#[test]
fn failure_reports_the_line_it_happened_on() {
    let mut builder = IndexBuilder::new(false);
    builder.bind(&Verbatim, None, Location::new("ch03.re", 1));

    let err = walk(
        &mut builder,
        &[Node::Heading(1, "ok"), Node::Note, Node::Heading(9, "too deep")],
    )
    .unwrap_err();
    assert_eq!(err, IndexError::LevelOutOfRange { level: 9, depth: 5 });
    assert_eq!(builder.location(), Some(&Location::new("ch03.re", 3)));

    let fatal = builder.error("heading nesting is broken");
    assert_eq!(
        fatal.to_string(),
        "ch03.re:3: error: heading nesting is broken"
    );
}

#[test]
fn warnings_do_not_disturb_numbering() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut builder = IndexBuilder::new(false);
    builder.bind(&Verbatim, None, Location::new("ch01.re", 1));

    builder.image("a", None).unwrap();
    builder.warn("image file for `a` not found");
    builder.caption_block_by_name("sidebar", None).unwrap();
    assert_eq!(builder.image("b", None).unwrap(), 2);
}

#[test]
fn columns_point_into_the_list_stream() {
    let mut builder = IndexBuilder::new(false);
    builder.bind(&Verbatim, None, Location::new("ch01.re", 1));

    walk(
        &mut builder,
        &[
            Node::List("l1"),
            Node::Column("c1"),
            Node::ListNum("l2"),
            Node::List("l3"),
            Node::Column("c2"),
            Node::Footnote("f1"),
        ],
    )
    .unwrap();

    let index = builder.into_index().unwrap();
    let positions: Vec<(usize, usize)> = index
        .columns
        .iter()
        .map(|c| (c.number, c.detail.list_position))
        .collect();
    assert_eq!(positions, vec![(1, 2), (2, 4)]);
    assert_eq!(index.footnotes.find("f1").unwrap().number, 1);
}

#[test]
fn second_chapter_starts_from_scratch() {
    let book = Book::new(IndexConfig::default());
    let ch1 = Chapter::new(&book, "ch01.re", Some(1));
    let ch2 = Chapter::new(&book, "ch02.re", Some(2));

    let mut builder = IndexBuilder::new(true);
    builder.bind(&Verbatim, Some(&ch1), Location::new("ch01.re", 1));
    walk(
        &mut builder,
        &[
            Node::Heading(1, "One"),
            Node::Heading(2, "One.1"),
            Node::Image("i1"),
            Node::List("l1"),
            Node::Column("c1"),
        ],
    )
    .unwrap();

    let first = builder
        .bind(&Verbatim, Some(&ch2), Location::new("ch02.re", 1))
        .unwrap();
    assert_eq!(
        numbers(&first),
        vec![
            (IndexKind::Heading, 2),
            (IndexKind::List, 1),
            (IndexKind::Image, 1),
            (IndexKind::Column, 1),
        ]
    );

    let second = builder.index().unwrap();
    assert!(second.is_empty());
    assert_eq!(second.sections.counts(), &[0, 0, 0, 0, 0]);
    assert_eq!(second.chapter.as_deref(), Some(RelativePath::new("ch02.re")));
    assert_eq!(builder.chapter().unwrap().number(), Some(2));

    walk(&mut builder, &[Node::Heading(2, "Fresh")]).unwrap();
    assert_eq!(
        builder.index().unwrap().headings.get(1).unwrap().detail.anchor,
        "0.1"
    );
}

#[test]
fn chapters_index_independently_across_threads() {
    let book = Book::new(IndexConfig::default());
    let paths = ["ch01.re", "ch02.re", "ch03.re"];

    let book_index: BookIndex = std::thread::scope(|scope| {
        let handles: Vec<_> = paths
            .iter()
            .enumerate()
            .map(|(i, path)| {
                let book = &book;
                scope.spawn(move || {
                    let chapter = Chapter::new(book, *path, Some(i + 1));
                    let mut builder = IndexBuilder::new(false);
                    builder.bind(&Verbatim, Some(&chapter), Location::new(*path, 1));
                    for n in 0..=i {
                        builder.image(&format!("img{n}"), None).unwrap();
                    }
                    builder.into_index().unwrap()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(book_index.len(), 3);
    for (i, path) in paths.iter().enumerate() {
        let index = book_index.get(RelativePath::new(path)).unwrap();
        assert_eq!(index.images.len(), i + 1);
        assert_eq!(index.images.get(1).unwrap().id.as_deref(), Some("img0"));
    }
}

#[test]
fn tokenize_is_identity_without_delimiters() {
    for s in ["", "x", "no commas here", "日本語のテキスト"] {
        let expected: Vec<String> = if s.is_empty() {
            vec![]
        } else {
            vec![s.to_string()]
        };
        assert_eq!(tokenize(s), expected);
    }
}
