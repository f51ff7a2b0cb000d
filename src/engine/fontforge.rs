//! FontForge adapter
//!
//! Operations on a [`FontForgeFont`] are recorded as statements of a
//! FontForge Python script. Nothing runs until `generate`, which writes the
//! script next to the scratch files and executes
//! `fontforge -lang=py -script <file>`.

use super::script::{py_bool, py_path, py_str, PyScript};
use super::{EditableFont, EngineError, FontEngine, FontNaming, NameEntry, NameId, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Drives the `fontforge` executable
#[derive(Debug, Clone)]
pub struct FontForgeEngine {
    executable: PathBuf,
    script_dir: PathBuf,
    prefer_potrace: bool,
}

impl FontForgeEngine {
    /// `script_dir` receives the generated scripts (normally the run's
    /// scratch directory)
    pub fn new(executable: impl Into<PathBuf>, script_dir: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            script_dir: script_dir.into(),
            prefer_potrace: true,
        }
    }

    pub fn with_potrace(mut self, prefer_potrace: bool) -> Self {
        self.prefer_potrace = prefer_potrace;
        self
    }
}

impl FontEngine for FontForgeEngine {
    type Font = FontForgeFont;

    fn open(&mut self, bdf_path: &Path) -> Result<FontForgeFont> {
        if !bdf_path.is_file() {
            return Err(EngineError::MissingInput(bdf_path.to_path_buf()));
        }

        let mut script = PyScript::new();
        script
            .line("import math")
            .line("import sys")
            .line("import fontforge")
            .line(format!("font = fontforge.open({})", py_path(bdf_path)?));

        Ok(FontForgeFont {
            engine: self.clone(),
            script,
        })
    }
}

/// A font being assembled as a FontForge script
#[derive(Debug)]
pub struct FontForgeFont {
    engine: FontForgeEngine,
    script: PyScript,
}

impl FontForgeFont {
    /// The script recorded so far
    pub fn script(&self) -> &PyScript {
        &self.script
    }

    fn run_script(&self, output: &Path) -> Result<()> {
        let mut script = self.script.clone();
        script
            .line("print('  Bitmap strikes: %s' % (font.bitmapSizes,), file=sys.stderr)")
            .line(format!(
                "font.generate({}, bitmap_type='otf')",
                py_path(output)?
            ))
            .line("font.close()");

        let file = tempfile::Builder::new()
            .prefix("build_")
            .suffix(".py")
            .tempfile_in(&self.engine.script_dir)
            .map_err(EngineError::Script)?;
        std::fs::write(file.path(), script.render()).map_err(EngineError::Script)?;

        let executable = self.engine.executable.display().to_string();
        tracing::debug!("Running {} on {}", executable, file.path().display());

        let result = Command::new(&self.engine.executable)
            .arg("-lang=py")
            .arg("-script")
            .arg(file.path())
            .output()
            .map_err(|source| EngineError::Spawn {
                executable: executable.clone(),
                source,
            })?;

        let stderr = String::from_utf8_lossy(&result.stderr);
        for line in stderr.lines().filter(|l| !l.trim().is_empty()) {
            tracing::debug!("fontforge: {}", line);
        }

        if !result.status.success() {
            return Err(EngineError::Failed {
                executable,
                status: result.status,
                stderr: stderr.trim().to_string(),
            });
        }

        match std::fs::metadata(output) {
            Ok(meta) if meta.len() > 0 => Ok(()),
            _ => Err(EngineError::MissingOutput(output.to_path_buf())),
        }
    }
}

impl EditableFont for FontForgeFont {
    fn import_bitmaps(&mut self, bdf_path: &Path, background: bool) -> Result<()> {
        if !bdf_path.is_file() {
            return Err(EngineError::MissingInput(bdf_path.to_path_buf()));
        }
        if background {
            self.script.line(format!(
                "font.importBitmaps({}, True)",
                py_path(bdf_path)?
            ));
        } else {
            self.script
                .line(format!("font.importBitmaps({})", py_path(bdf_path)?));
        }
        Ok(())
    }

    fn set_em(&mut self, em: u32) {
        self.script.line(format!("font.em = {em}"));
    }

    fn auto_trace(&mut self) -> Result<()> {
        self.script
            .line(format!(
                "fontforge.setPrefs('PreferPotrace', {})",
                py_bool(self.engine.prefer_potrace)
            ))
            .line("font.selection.all()")
            .line("font.autoTrace()");
        Ok(())
    }

    fn add_extrema(&mut self) {
        self.script.line("font.addExtrema()");
    }

    fn simplify(&mut self) {
        self.script.line("font.simplify()");
    }

    fn round_advance_widths(&mut self, step: u32) {
        if step == 0 {
            return;
        }
        // Half rounds up, matching `build::round_to_grid`.
        self.script
            .line("for glyph in font.glyphs():")
            .line(format!(
                "    glyph.width = int(math.floor(glyph.width / {step} + 0.5)) * {step}"
            ));
    }

    fn set_naming(&mut self, naming: &FontNaming) {
        self.script
            .line(format!("font.familyname = {}", py_str(&naming.family_name)))
            .line(format!("font.fontname = {}", py_str(&naming.font_name)))
            .line(format!("font.fullname = {}", py_str(&naming.full_name)))
            .line(format!("font.weight = {}", py_str(&naming.weight_name)))
            .line(format!("font.os2_weight = {}", naming.weight_class))
            .line(format!("font.os2_stylemap = {:#x}", naming.fs_selection))
            .line(format!("font.macstyle = {:#x}", naming.mac_style));
    }

    fn append_name(&mut self, entry: &NameEntry) {
        let id = match entry.id {
            NameId::Family => "Family",
            NameId::SubFamily => "SubFamily",
            NameId::FullName => "Fullname",
            NameId::PostScriptName => "PostScriptName",
        };
        self.script.line(format!(
            "font.appendSFNTName({}, {}, {})",
            py_str(entry.language),
            py_str(id),
            py_str(&entry.value)
        ));
    }

    fn set_copyright(&mut self, copyright: &str) {
        self.script
            .line(format!("font.copyright = {}", py_str(copyright)));
    }

    fn set_comment(&mut self, comment: &str) {
        self.script.line(format!("font.comment = {}", py_str(comment)));
    }

    fn generate(&mut self, output: &Path) -> Result<()> {
        self.run_script(output)
    }

    // The generated script closes the font itself.
    fn close(self) {
        tracing::trace!(
            "Dropping FontForge script of {} statements",
            self.script.lines().len()
        );
    }
}
