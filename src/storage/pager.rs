use std::{
    fs::{File, OpenOptions},
    io::{ErrorKind, Read, Seek, SeekFrom, Write},
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::types::{
    PAGE_SIZE, PageNum, TABLE_MAX_PAGES,
    error::{DatabaseError, Result},
    page::Page,
};

/// Page cache over a single database file.
///
/// Pages are loaded on first access and stay resident until the pager is
/// closed. There is no eviction: `TABLE_MAX_PAGES` is the hard ceiling on
/// both the file size and the memory held by the cache.
pub struct Pager {
    path: PathBuf,
    file: File,
    file_length: u64,
    num_pages: u32,
    pages: Vec<Option<Page>>,
}

impl Pager {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .map_err(|source| DatabaseError::Open {
                path: path.to_path_buf(),
                source,
            })?;

        let file_length = file.metadata()?.len();
        if file_length % PAGE_SIZE as u64 != 0 {
            return Err(DatabaseError::CorruptFile {
                length: file_length,
            });
        }
        let num_pages = (file_length / PAGE_SIZE as u64) as u32;
        info!(
            "Opened {} ({} bytes, {} pages)",
            path.display(),
            file_length,
            num_pages
        );

        Ok(Self {
            path: path.to_path_buf(),
            file,
            file_length,
            num_pages,
            pages: (0..TABLE_MAX_PAGES).map(|_| None).collect(),
        })
    }

    fn page_offset(page_num: PageNum) -> u64 {
        page_num as u64 * PAGE_SIZE as u64
    }

    /// Returns the resident buffer for `page_num`, reading it from disk the
    /// first time it is asked for. Pages past the end of the file come back
    /// zeroed.
    pub fn get_page(&mut self, page_num: PageNum) -> Result<&mut Page> {
        let index = page_num as usize;
        if index >= TABLE_MAX_PAGES {
            return Err(DatabaseError::PageOutOfBounds {
                page_num,
                max: TABLE_MAX_PAGES as PageNum,
            });
        }

        let page = match self.pages[index].take() {
            Some(page) => page,
            None => {
                let page = self.load_page(page_num)?;
                if page_num >= self.num_pages {
                    self.num_pages = page_num + 1;
                }
                page
            }
        };
        Ok(self.pages[index].insert(page))
    }

    fn load_page(&mut self, page_num: PageNum) -> Result<Page> {
        let mut page = Page::new(page_num);

        let mut pages_on_disk = self.file_length / PAGE_SIZE as u64;
        if self.file_length % PAGE_SIZE as u64 != 0 {
            pages_on_disk += 1;
        }

        if (page_num as u64) < pages_on_disk {
            self.file.seek(SeekFrom::Start(Self::page_offset(page_num)))?;
            let bytes_read = read_up_to(&mut self.file, page.as_bytes_mut())?;
            debug!("Loaded page {} ({} bytes from disk)", page_num, bytes_read);
        } else {
            debug!("Allocated page {} past end of file", page_num);
        }
        Ok(page)
    }

    /// Writes the first `size` bytes of resident page `page_num` back to its
    /// slot in the file.
    pub fn flush(&mut self, page_num: PageNum, size: usize) -> Result<()> {
        if size > PAGE_SIZE {
            return Err(DatabaseError::InvalidFlushSize {
                expected: PAGE_SIZE,
                actual: size,
            });
        }
        let page = self
            .pages
            .get(page_num as usize)
            .and_then(Option::as_ref)
            .ok_or(DatabaseError::FlushNonResident { page_num })?;

        let offset = Self::page_offset(page_num);
        self.file.seek(SeekFrom::Start(offset))?;
        self.file.write_all(&page.as_bytes()[..size])?;
        self.file_length = self.file_length.max(offset + size as u64);
        debug!("Flushed page {} ({} bytes)", page_num, size);
        Ok(())
    }

    /// Flushes every resident page, releases the cache and closes the file.
    pub fn close(mut self) -> Result<()> {
        for page_num in 0..self.num_pages {
            if self.is_resident(page_num) {
                self.flush(page_num, PAGE_SIZE)?;
                self.pages[page_num as usize] = None;
            }
        }
        self.file.flush()?;
        self.file.sync_all()?;
        info!(
            "Closed {} ({} pages)",
            self.path.display(),
            self.num_pages
        );
        Ok(())
    }

    pub fn is_resident(&self, page_num: PageNum) -> bool {
        self.pages
            .get(page_num as usize)
            .is_some_and(Option::is_some)
    }

    pub fn resident_pages(&self) -> usize {
        self.pages.iter().filter(|page| page.is_some()).count()
    }

    /// Number of pages the pager knows about: pages in the file at open time,
    /// grown by any page loaded past the end.
    pub fn num_pages(&self) -> u32 {
        self.num_pages
    }

    pub fn file_length(&self) -> u64 {
        self.file_length
    }
}

fn read_up_to(file: &mut File, buffer: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buffer.len() {
        match file.read(&mut buffer[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}
