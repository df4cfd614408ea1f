//! Accumulation state for one `<PubmedArticle>` while reading EFetch events
//!
//! Only the elements needed to build a [`PaperRecord`](crate::PaperRecord)
//! are tracked; everything else, including `<PubmedBookArticle>`, is skipped.

/// Element whose text content is being collected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Field {
    Pmid,
    Title,
    Year,
    Month,
    Day,
    MedlineDate,
    LastName,
    ForeName,
    Affiliation,
}

/// Text collected for a [`Field`] until its end tag at `depth`
#[derive(Debug)]
pub(super) struct Capture {
    pub field: Field,
    pub depth: usize,
    pub text: String,
}

impl Capture {
    pub fn new(field: Field, depth: usize) -> Self {
        Self {
            field,
            depth,
            text: String::new(),
        }
    }
}

#[derive(Debug, Default)]
pub(super) struct PubDateXml {
    pub year: Option<String>,
    pub month: Option<String>,
    pub day: Option<String>,
    pub medline_date: Option<String>,
}

#[derive(Debug, Default)]
pub(super) struct AuthorXml {
    pub last_name: Option<String>,
    pub fore_name: Option<String>,
    /// Raw text of the author's first `AffiliationInfo/Affiliation`
    pub affiliation: Option<String>,
}

#[derive(Debug)]
pub(super) struct ArticleXml {
    /// Depth of the `<PubmedArticle>` start tag
    pub depth: usize,
    pub pmid: Option<String>,
    pub title: Option<String>,
    pub pub_date: Option<PubDateXml>,
    pub authors: Vec<AuthorXml>,
    pub_date_depth: Option<usize>,
    author_depth: Option<usize>,
    affiliation_info_depth: Option<usize>,
}

impl ArticleXml {
    pub fn new(depth: usize) -> Self {
        Self {
            depth,
            pmid: None,
            title: None,
            pub_date: None,
            authors: Vec::new(),
            pub_date_depth: None,
            author_depth: None,
            affiliation_info_depth: None,
        }
    }

    /// Handle a start tag at `depth`; returns the field to capture, if any
    ///
    /// The first `PMID`, `ArticleTitle` and `PubDate` in the article win.
    pub fn open(&mut self, name: &[u8], depth: usize) -> Option<Field> {
        let parent = depth.checked_sub(1);

        match name {
            b"PMID" if self.pmid.is_none() => Some(Field::Pmid),
            b"ArticleTitle" if self.title.is_none() => Some(Field::Title),
            b"PubDate" if self.pub_date.is_none() => {
                self.pub_date = Some(PubDateXml::default());
                self.pub_date_depth = Some(depth);
                None
            }
            b"Year" if self.pub_date_depth == parent => Some(Field::Year),
            b"Month" if self.pub_date_depth == parent => Some(Field::Month),
            b"Day" if self.pub_date_depth == parent => Some(Field::Day),
            b"MedlineDate" if self.pub_date_depth == parent => Some(Field::MedlineDate),
            b"Author" => {
                self.open_author(depth);
                None
            }
            b"LastName" if self.author_depth == parent => Some(Field::LastName),
            b"ForeName" if self.author_depth == parent => Some(Field::ForeName),
            b"AffiliationInfo" if self.author_depth.is_some() => {
                self.affiliation_info_depth = Some(depth);
                None
            }
            b"Affiliation"
                if self.affiliation_info_depth == parent
                    && self.authors.last().is_some_and(|a| a.affiliation.is_none()) =>
            {
                Some(Field::Affiliation)
            }
            _ => None,
        }
    }

    /// Handle a self-closing tag at `depth`
    pub fn empty(&mut self, name: &[u8], depth: usize) {
        if name == b"Author" {
            self.open_author(depth);
            self.author_depth = None;
        }
    }

    /// Handle an end tag at `depth`
    pub fn close(&mut self, depth: usize) {
        let depth = Some(depth);
        if self.pub_date_depth == depth {
            self.pub_date_depth = None;
        }
        if self.author_depth == depth {
            self.author_depth = None;
        }
        if self.affiliation_info_depth == depth {
            self.affiliation_info_depth = None;
        }
    }

    /// Store the text collected for `field`
    pub fn apply(&mut self, field: Field, text: String) {
        match field {
            Field::Pmid => self.pmid = Some(text),
            Field::Title => self.title = Some(text),
            Field::Year | Field::Month | Field::Day | Field::MedlineDate => {
                let Some(pub_date) = self.pub_date.as_mut() else {
                    return;
                };
                let slot = match field {
                    Field::Year => &mut pub_date.year,
                    Field::Month => &mut pub_date.month,
                    Field::Day => &mut pub_date.day,
                    _ => &mut pub_date.medline_date,
                };
                *slot = Some(text);
            }
            Field::LastName | Field::ForeName | Field::Affiliation => {
                let Some(author) = self.authors.last_mut() else {
                    return;
                };
                match field {
                    Field::LastName => author.last_name = Some(text),
                    Field::ForeName => author.fore_name = Some(text),
                    _ => author.affiliation = Some(text),
                }
            }
        }
    }

    fn open_author(&mut self, depth: usize) {
        self.authors.push(AuthorXml::default());
        self.author_depth = Some(depth);
        self.affiliation_info_depth = None;
    }
}
