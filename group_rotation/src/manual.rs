/*!

This is the long-form manual for `group_rotation` and the `rota` command.

## How the rotation works

Every run takes a roster of participants, a set of unavailable participants,
a number of groups and a day index (days since 1970-01-01, UTC).

1. The roster is normalized: every name is trimmed, blank lines are dropped,
   duplicates are collapsed and the names are sorted. The sorted order is the
   *canonical order*.
2. Unavailable participants are removed (exact match on the trimmed name).
3. The participant at position `i` of the canonical order joins group
   `((i + day) mod groups) + 1`.

Because of step 3, every participant moves to the next group each day and
comes back to the same group after `groups` days. Group sizes never differ by
more than one.

For example, with `Ann, Bob, Cleo, Dan, Eve` and 2 groups:

| day   | group 1           | group 2           |
|-------|-------------------|-------------------|
| 10    | Ann, Cleo, Eve    | Bob, Dan          |
| 11    | Bob, Dan          | Ann, Cleo, Eve    |

### `seededShuffle`

The alternative policy reshuffles the canonical order with a linear
congruential generator seeded by the day index, then deals participants out
in turn (`i mod groups`). It mixes groups more from one day to the next,
but gives no guarantee that everybody visits every group.

## Input formats

The following participant sources are supported:
* `text` one participant per line
* `csv` one column of a CSV file
* `xlsx` one column of an Excel worksheet

### `text`

```text
Ann
Bob
  Cleo
```

Leading and trailing spaces are ignored, as are blank lines.

### `csv`

```text
name,team
Ann,blue
Bob,red
```

Use `nameColumnIndex` to select the column (number starting at 1, or an
Excel-style letter such as `"B"`) and `firstRowIndex` to skip headers
(`2` in this example).

### `xlsx`

Same options as `csv`, plus `excelWorksheetName` when the workbook contains
more than one worksheet.

## Configuration

All the options can be passed on the command line, or grouped in a JSON file
given with `--config`. Command line flags take precedence.

```json
{
  "outputSettings": {
    "scheduleName": "Lunch breaks",
    "outputDirectory": "out"
  },
  "participantSources": [
    { "provider": "text", "filePath": "team.txt" }
  ],
  "participants": ["Zoe"],
  "unavailable": ["Bob"],
  "rules": {
    "numGroups": 3,
    "maxGroups": 10,
    "rotationPolicy": "dayShift"
  },
  "timeSlots": [
    { "start": "12:00", "end": "12:30" },
    { "start": "12:30", "end": "13:00" },
    { "start": "13:00", "end": "13:30" }
  ]
}
```

Paths are relative to the directory of the configuration file.
Time slots follow the 24-hour `HH:MM` notation. Missing slots are filled with
`00:00`-`00:00`, extra ones are ignored.

## Outputs

* `--out` writes the spreadsheet: an Excel workbook with a `Schedule` sheet,
  `Rota_Schedule_<date>.xlsx` when `--out` is a directory. Each group starts
  with a header row holding its time slot (for example `12:00PM - 12:30PM`),
  merged over two columns, followed by its members over two columns. A blank
  row separates groups. A path ending with `.csv` (or `stdout`) gets the same
  rows as CSV.
* `--summary` writes a JSON summary (`stdout` is accepted).
* `--reference` compares the JSON summary with a previously saved one and
  fails if they differ.

 */
