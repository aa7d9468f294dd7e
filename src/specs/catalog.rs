// src/specs/catalog.rs
//
// One catalogue listing page:
//
//   <article class="product_pod">
//     <h3><a href="..." title="Full Title">Short…</a></h3>
//     <p class="price_color">£51.77</p>
//   </article>
//   ...
//   <li class="next"><a href="page-2.html">next</a></li>

use crate::core::html::{attr_value, inner_after_open_tag, next_tag_block_ci, open_tag, slice_between_ci, strip_tags};
use crate::core::sanitize::{normalize_entities, normalize_ws, parse_price_text};
use crate::model::Price;

const POD_OPEN: &str = r#"<article class="product_pod""#;
const POD_CLOSE: &str = "</article>";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub price: Price,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CataloguePage {
    pub books: Vec<Book>,
    /// Raw href of the "next" link, unresolved.
    pub next: Option<String>,
    /// Product blocks missing a title or price.
    pub skipped: usize,
}

pub fn parse_page(doc: &str) -> CataloguePage {
    let mut page = CataloguePage::default();

    let mut pos = 0usize;
    while let Some((s, e)) = next_tag_block_ci(doc, POD_OPEN, POD_CLOSE, pos) {
        pos = e;
        match parse_pod(&doc[s..e]) {
            Some(book) => page.books.push(book),
            None => {
                page.skipped += 1;
                logw!("Catalog: product block without title/price at byte {}", s);
            }
        }
    }

    page.next = next_href(doc);
    page
}

fn parse_pod(block: &str) -> Option<Book> {
    let title = pod_title(block)?;
    let price_html = slice_between_ci(block, r#"<p class="price_color""#, "</p>")?;
    let price = parse_price_text(&strip_tags(price_html))?;
    Some(Book { title, price })
}

/// Prefer the link's `title` attribute; the link text is truncated on the site.
fn pod_title(block: &str) -> Option<String> {
    let h3 = slice_between_ci(block, "<h3", "</h3>")?;
    let (a_s, a_e) = next_tag_block_ci(h3, "<a", "</a>", 0)?;
    let a = &h3[a_s..a_e];

    let from_attr = attr_value(open_tag(a), "title")
        .map(|t| normalize_ws(&normalize_entities(&t)))
        .filter(|t| !t.is_empty());

    from_attr
        .or_else(|| Some(strip_tags(normalize_entities(&inner_after_open_tag(a)))))
        .filter(|t| !t.is_empty())
}

fn next_href(doc: &str) -> Option<String> {
    let li = slice_between_ci(doc, r#"<li class="next""#, "</li>")?;
    let (a_s, a_e) = next_tag_block_ci(li, "<a", "</a>", 0)?;
    attr_value(open_tag(&li[a_s..a_e]), "href").filter(|h| !h.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
<ol class="row">
  <li class="col-xs-6">
    <article class="product_pod">
      <div class="image_container"><a href="a-light-in-the-attic_1000/index.html"><img src="x.jpg" alt="A Light in the Attic"></a></div>
      <p class="star-rating Three"></p>
      <h3><a href="catalogue/a-light-in-the-attic_1000/index.html" title="A Light in the Attic">A Light in the ...</a></h3>
      <div class="product_price">
        <p class="price_color">Â£51.77</p>
        <p class="instock availability">In stock</p>
      </div>
    </article>
  </li>
  <li class="col-xs-6">
    <article class="product_pod">
      <h3><a href="catalogue/tipping/index.html">Tipping the Velvet</a></h3>
      <div class="product_price"><p class="price_color">&pound;53.74</p></div>
    </article>
  </li>
  <li class="col-xs-6">
    <article class="product_pod">
      <h3><a href="catalogue/broken/index.html" title="No Price"></a></h3>
    </article>
  </li>
</ol>
<ul class="pager">
  <li class="current">Page 1 of 50</li>
  <li class="next"><a href="catalogue/page-2.html">next</a></li>
</ul>"#;

    #[test]
    fn parses_books_next_and_skips() {
        let page = parse_page(PAGE);
        assert_eq!(
            page.books,
            vec![
                Book { title: s!("A Light in the Attic"), price: Price::new(51, 77) },
                Book { title: s!("Tipping the Velvet"), price: Price::new(53, 74) },
            ]
        );
        assert_eq!(page.skipped, 1);
        assert_eq!(page.next.as_deref(), Some("catalogue/page-2.html"));
    }

    #[test]
    fn last_page_has_no_next() {
        let page = parse_page(r#"<ul class="pager"><li class="previous"><a href="page-49.html">previous</a></li></ul>"#);
        assert!(page.books.is_empty());
        assert_eq!(page.next, None);
    }
}
