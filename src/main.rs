//! Mini-Book CLI (for eyeballing rendered pages)

use mini_book::{Chapter, ChapterLayout};

fn main() {
    let mut chapter = Chapter::new(1, "The Binding");
    chapter.content.append_paragraph(
        "ONCE upon a time there was some test content. It was long, and crazy. \
         This is extra text to check wrapping.",
    );
    chapter.content.push_blank_line();
    chapter
        .content
        .append_paragraph("This is a new paragraph with enough text to wrap across lines.");

    let layout = ChapterLayout::default();
    match chapter.render(&"*** Arise ***".to_uppercase(), &layout) {
        Ok(pages) => {
            for page in pages {
                print!("{}", page.text);
            }
        }
        Err(err) => eprintln!("{}", err),
    }
}
