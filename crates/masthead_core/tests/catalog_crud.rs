use masthead_core::{
    Article, ArticleListQuery, Author, CatalogRepository, Magazine, MemoryCatalog, RepoError,
};
use uuid::Uuid;

fn seeded_catalog() -> (MemoryCatalog, Author, Magazine) {
    let mut catalog = MemoryCatalog::new();
    let author = Author::new("Amy").unwrap();
    let magazine = Magazine::new("TechZine", "Tech").unwrap();
    catalog.create_author(&author).unwrap();
    catalog.create_magazine(&magazine).unwrap();
    (catalog, author, magazine)
}

#[test]
fn create_and_get_roundtrip() {
    let (mut catalog, author, magazine) = seeded_catalog();

    let loaded_author = catalog.get_author(author.uuid()).unwrap().unwrap();
    assert_eq!(loaded_author.name(), "Amy");

    let loaded_magazine = catalog.get_magazine(magazine.uuid()).unwrap().unwrap();
    assert_eq!(loaded_magazine.name(), "TechZine");
    assert_eq!(loaded_magazine.category(), "Tech");

    let article = Article::new(author.uuid(), magazine.uuid(), "Valid Title").unwrap();
    let id = catalog.create_article(&article).unwrap();
    let loaded_article = catalog.get_article(id).unwrap().unwrap();
    assert_eq!(loaded_article.title(), "Valid Title");
    assert_eq!(loaded_article.author_id(), author.uuid());
    assert_eq!(loaded_article.magazine_id(), magazine.uuid());
}

#[test]
fn create_article_links_author_magazine_and_registry_exactly_once() {
    let (mut catalog, author, magazine) = seeded_catalog();

    let article = Article::new(author.uuid(), magazine.uuid(), "Valid Title").unwrap();
    let id = catalog.create_article(&article).unwrap();

    let author_links = catalog.get_author(author.uuid()).unwrap().unwrap();
    assert_eq!(author_links.article_ids(), [id]);

    let magazine_links = catalog.get_magazine(magazine.uuid()).unwrap().unwrap();
    assert_eq!(magazine_links.article_ids(), [id]);

    let registry = catalog.list_articles(&ArticleListQuery::default()).unwrap();
    assert_eq!(registry.len(), 1);
    assert_eq!(registry[0].uuid(), id);
}

#[test]
fn failed_article_creation_leaves_no_trace() {
    let (mut catalog, author, magazine) = seeded_catalog();

    let unknown_magazine = Uuid::new_v4();
    let dangling = Article::new(author.uuid(), unknown_magazine, "Valid Title").unwrap();
    let err = catalog.create_article(&dangling).unwrap_err();
    assert!(matches!(err, RepoError::MagazineNotFound(id) if id == unknown_magazine));

    let unknown_author = Uuid::new_v4();
    let orphaned = Article::new(unknown_author, magazine.uuid(), "Valid Title").unwrap();
    let err = catalog.create_article(&orphaned).unwrap_err();
    assert!(matches!(err, RepoError::AuthorNotFound(id) if id == unknown_author));

    assert_eq!(catalog.article_count(), 0);
    let author_links = catalog.get_author(author.uuid()).unwrap().unwrap();
    assert!(author_links.article_ids().is_empty());
    let magazine_links = catalog.get_magazine(magazine.uuid()).unwrap().unwrap();
    assert!(magazine_links.article_ids().is_empty());
}

#[test]
fn create_rejects_id_reuse() {
    let (mut catalog, author, _magazine) = seeded_catalog();

    let err = catalog.create_author(&author).unwrap_err();
    assert!(matches!(err, RepoError::IdInUse(id) if id == author.uuid()));
}

#[test]
fn mutations_of_absent_entities_return_not_found() {
    let (mut catalog, author, _magazine) = seeded_catalog();

    let missing = Uuid::new_v4();
    assert!(matches!(
        catalog.rename_magazine(missing, "NewName"),
        Err(RepoError::MagazineNotFound(id)) if id == missing
    ));
    assert!(matches!(
        catalog.retitle_article(missing, "Replacement Title"),
        Err(RepoError::ArticleNotFound(id)) if id == missing
    ));
    assert!(matches!(
        catalog.reassign_article_author(missing, author.uuid()),
        Err(RepoError::ArticleNotFound(id)) if id == missing
    ));
}

#[test]
fn reassign_rejects_unregistered_target() {
    let (mut catalog, author, magazine) = seeded_catalog();
    let article = Article::new(author.uuid(), magazine.uuid(), "Valid Title").unwrap();
    catalog.create_article(&article).unwrap();

    let stranger = Uuid::new_v4();
    let err = catalog
        .reassign_article_author(article.uuid(), stranger)
        .unwrap_err();
    assert!(matches!(err, RepoError::AuthorNotFound(id) if id == stranger));

    let unchanged = catalog.get_article(article.uuid()).unwrap().unwrap();
    assert_eq!(unchanged.author_id(), author.uuid());
}

#[test]
fn recategorize_validates_and_keeps_prior_value() {
    let (mut catalog, _author, magazine) = seeded_catalog();

    let err = catalog
        .recategorize_magazine(magazine.uuid(), "")
        .unwrap_err();
    assert!(matches!(err, RepoError::MagazineValidation(_)));

    let unchanged = catalog.get_magazine(magazine.uuid()).unwrap().unwrap();
    assert_eq!(unchanged.category(), "Tech");

    catalog.recategorize_magazine(magazine.uuid(), "Art").unwrap();
    let updated = catalog.get_magazine(magazine.uuid()).unwrap().unwrap();
    assert_eq!(updated.category(), "Art");
}

#[test]
fn list_articles_filters_by_current_assignments_and_title() {
    let (mut catalog, author, magazine) = seeded_catalog();
    let other_author = Author::new("Bob").unwrap();
    catalog.create_author(&other_author).unwrap();

    let by_amy = Article::new(author.uuid(), magazine.uuid(), "Rust for Editors").unwrap();
    let by_bob = Article::new(other_author.uuid(), magazine.uuid(), "Print is Back").unwrap();
    catalog.create_article(&by_amy).unwrap();
    catalog.create_article(&by_bob).unwrap();

    let amy_only = catalog
        .list_articles(&ArticleListQuery {
            author: Some(author.uuid()),
            ..ArticleListQuery::default()
        })
        .unwrap();
    assert_eq!(amy_only.len(), 1);
    assert_eq!(amy_only[0].uuid(), by_amy.uuid());

    let rust_titles = catalog
        .list_articles(&ArticleListQuery {
            title_contains: Some("RUST".to_string()),
            ..ArticleListQuery::default()
        })
        .unwrap();
    assert_eq!(rust_titles.len(), 1);
    assert_eq!(rust_titles[0].uuid(), by_amy.uuid());
}

#[test]
fn list_articles_pagination_is_stable() {
    let (mut catalog, author, magazine) = seeded_catalog();

    let first = Article::new(author.uuid(), magazine.uuid(), "First Article").unwrap();
    let second = Article::new(author.uuid(), magazine.uuid(), "Second Article").unwrap();
    let third = Article::new(author.uuid(), magazine.uuid(), "Third Article").unwrap();
    catalog.create_article(&first).unwrap();
    catalog.create_article(&second).unwrap();
    catalog.create_article(&third).unwrap();

    let page = catalog
        .list_articles(&ArticleListQuery {
            limit: Some(2),
            offset: 1,
            ..ArticleListQuery::default()
        })
        .unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].uuid(), second.uuid());
    assert_eq!(page[1].uuid(), third.uuid());

    let offset_only = catalog
        .list_articles(&ArticleListQuery {
            offset: 2,
            ..ArticleListQuery::default()
        })
        .unwrap();
    assert_eq!(offset_only.len(), 1);
    assert_eq!(offset_only[0].uuid(), third.uuid());
}

#[test]
fn list_authors_is_id_ordered() {
    let mut catalog = MemoryCatalog::new();
    let second = Author::with_id(
        Uuid::parse_str("00000000-0000-4000-8000-000000000002").unwrap(),
        "Bob",
    )
    .unwrap();
    let first = Author::with_id(
        Uuid::parse_str("00000000-0000-4000-8000-000000000001").unwrap(),
        "Amy",
    )
    .unwrap();
    catalog.create_author(&second).unwrap();
    catalog.create_author(&first).unwrap();

    let listed = catalog.list_authors().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].uuid(), first.uuid());
    assert_eq!(listed[1].uuid(), second.uuid());
}

#[test]
fn clear_resets_every_collection() {
    let (mut catalog, author, magazine) = seeded_catalog();
    let article = Article::new(author.uuid(), magazine.uuid(), "Valid Title").unwrap();
    catalog.create_article(&article).unwrap();

    catalog.clear();

    assert_eq!(catalog.author_count(), 0);
    assert_eq!(catalog.magazine_count(), 0);
    assert_eq!(catalog.article_count(), 0);
    assert!(catalog.get_article(article.uuid()).unwrap().is_none());
    assert!(catalog
        .list_articles(&ArticleListQuery::default())
        .unwrap()
        .is_empty());
}

#[test]
fn registry_preserves_creation_order_across_magazines() {
    let (mut catalog, author, magazine) = seeded_catalog();
    let other = Magazine::new("ArtZine", "Art").unwrap();
    catalog.create_magazine(&other).unwrap();

    let in_tech = Article::new(author.uuid(), magazine.uuid(), "First in Tech").unwrap();
    let in_art = Article::new(author.uuid(), other.uuid(), "Then one in Art").unwrap();
    let back_in_tech = Article::new(author.uuid(), magazine.uuid(), "Back to Tech again").unwrap();
    catalog.create_article(&in_tech).unwrap();
    catalog.create_article(&in_art).unwrap();
    catalog.create_article(&back_in_tech).unwrap();

    let registry = catalog.list_articles(&ArticleListQuery::default()).unwrap();
    let ids: Vec<_> = registry.iter().map(Article::uuid).collect();
    assert_eq!(ids, [in_tech.uuid(), in_art.uuid(), back_in_tech.uuid()]);
}
